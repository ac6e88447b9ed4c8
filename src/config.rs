use serde::{Deserialize, Serialize};
use std::{fs, io, path::PathBuf};
use validator::{Validate, ValidationError};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("File {0} not found")]
    FileNotFound(String),

    #[error("Parsing error: {0}")]
    ParsingError(String),

    #[error("Validation errors: {0}")]
    ValidationError(String),

    #[error("Unknown error occurred: {0}")]
    Unknown(String),
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TemplateFile {
    pub location: PathBuf,
}

impl Default for TemplateFile {
    fn default() -> Self {
        return Self {
            // Where the surrounding build tool drops the synthesized template.
            location: PathBuf::from(".build/in.yml"),
        };
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct StackConfig {
    #[validate(required)]
    pub app_name: Option<String>,

    #[serde(default)]
    #[validate(custom = "validate_template_file")]
    pub template: TemplateFile,
}

pub fn parse(path: &PathBuf) -> Result<StackConfig, Error> {
    let contents = match fs::read_to_string(path) {
        Ok(raw_contents) => Ok(raw_contents),
        Err(error) => match error.kind() {
            io::ErrorKind::NotFound => Err(Error::FileNotFound(path.display().to_string())),
            _ => Err(Error::Unknown(error.to_string())),
        },
    }?;

    let config: StackConfig = match serde_yaml::from_str(&contents) {
        Ok(data) => Ok(data),
        Err(error) => Err(Error::ParsingError(error.to_string())),
    }?;

    match config.validate() {
        Ok(_) => (),
        Err(error) => return Err(Error::ValidationError(error.to_string())),
    }

    return Ok(config);
}

fn validate_template_file(template_file: &TemplateFile) -> Result<(), ValidationError> {
    let file_extension = match template_file.location.extension() {
        Some(extension) => extension,
        None => {
            return Err(ValidationError::new(
                "Unable to parse the extension of the template file location",
            ))
        }
    };
    if file_extension != "yml" && file_extension != "yaml" && file_extension != "json" {
        return Err(ValidationError::new(
            "The template file location has to end with `.yml`, `.yaml` or `.json`",
        ));
    }

    return Ok(());
}
