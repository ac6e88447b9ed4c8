use indexmap::IndexMap;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_yaml::Value;
use std::{fs, io, path::Path};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("File {0} not found")]
    FileNotFound(String),

    #[error("Parsing error: {0}")]
    ParsingError(String),

    #[error("Resource `{0}` not found in template")]
    ResourceNotFound(String),

    #[error("Resource `{logical_id}` has type `{actual}`, expected `{expected}`")]
    KindMismatch {
        logical_id: String,
        expected: String,
        actual: String,
    },

    #[error("Unknown error occurred: {0}")]
    Unknown(String),
}

/// A synthesized CloudFormation template, keyed by logical resource ID.
/// Top-level sections other than `Resources` are carried through untouched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Template {
    #[serde(flatten)]
    sections: IndexMap<String, Value>,

    #[serde(rename = "Resources")]
    resources: IndexMap<String, Resource>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Resource {
    #[serde(rename = "Type")]
    pub kind: String,

    #[serde(rename = "Properties", default, skip_serializing_if = "Value::is_null")]
    pub properties: Value,

    #[serde(flatten)]
    pub attributes: IndexMap<String, Value>,
}

impl Resource {
    pub fn properties_as<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let properties = match serde_yaml::from_value(self.properties.clone()) {
            Ok(data) => Ok(data),
            Err(error) => Err(Error::ParsingError(error.to_string())),
        }?;

        return Ok(properties);
    }

    pub fn set_properties<T: Serialize>(&mut self, properties: &T) -> Result<(), Error> {
        self.properties = match serde_yaml::to_value(properties) {
            Ok(value) => Ok(value),
            Err(error) => Err(Error::Unknown(error.to_string())),
        }?;

        return Ok(());
    }
}

pub fn load(path: &Path) -> Result<Template, Error> {
    let contents = match fs::read_to_string(path) {
        Ok(raw_contents) => Ok(raw_contents),
        Err(error) => match error.kind() {
            io::ErrorKind::NotFound => Err(Error::FileNotFound(path.display().to_string())),
            _ => Err(Error::Unknown(error.to_string())),
        },
    }?;

    let is_json = match path.extension() {
        Some(extension) => extension == "json",
        None => false,
    };

    let template = if is_json {
        match serde_json::from_str::<Template>(&contents) {
            Ok(data) => Ok(data),
            Err(error) => Err(Error::ParsingError(error.to_string())),
        }
    } else {
        match serde_yaml::from_str::<Template>(&contents) {
            Ok(data) => Ok(data),
            Err(error) => Err(Error::ParsingError(error.to_string())),
        }
    }?;

    return Ok(template);
}

impl Template {
    pub fn get_resource(&self, logical_id: &str, expected_kind: &str) -> Result<&Resource, Error> {
        let resource = match self.resources.get(logical_id) {
            Some(resource) => resource,
            None => return Err(Error::ResourceNotFound(logical_id.to_string())),
        };

        if resource.kind != expected_kind {
            return Err(Error::KindMismatch {
                logical_id: logical_id.to_string(),
                expected: expected_kind.to_string(),
                actual: resource.kind.clone(),
            });
        }

        return Ok(resource);
    }

    pub fn get_resource_mut(
        &mut self,
        logical_id: &str,
        expected_kind: &str,
    ) -> Result<&mut Resource, Error> {
        // Immutable lookup first so the error paths stay in one place.
        self.get_resource(logical_id, expected_kind)?;

        let resource = match self.resources.get_mut(logical_id) {
            Some(resource) => resource,
            None => return Err(Error::ResourceNotFound(logical_id.to_string())),
        };

        return Ok(resource);
    }

    pub fn logical_ids(&self) -> impl Iterator<Item = &String> {
        return self.resources.keys();
    }

    pub fn to_yaml(&self) -> Result<String, Error> {
        let contents = match serde_yaml::to_string(self) {
            Ok(data) => Ok(data),
            Err(error) => Err(Error::Unknown(error.to_string())),
        }?;

        return Ok(contents);
    }
}
