use crate::config::StackConfig;
use crate::resources::{PipelineProperties, PolicyProperties, PIPELINE_KIND, POLICY_KIND};
use crate::template::{self, Template};

pub const PIPELINE_LOGICAL_ID: &str = "Pipeline";
pub const BUILD_PROJECT_POLICY_LOGICAL_ID: &str = "BuildProjectPolicy";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("Template error: {0}")]
    Template(#[from] template::Error),

    #[error("Transform `{0}` is not implemented")]
    NotImplemented(&'static str),
}

/// A stack built from a pre-synthesized template with deployment-specific
/// transforms applied before it is handed to the deploy step. Any transform
/// failure aborts construction so a partially patched template never ships.
pub struct TransformedStack {
    pub app_name: String,
    pub template: Template,
}

impl TransformedStack {
    pub fn synth(config: &StackConfig) -> Result<Self, Error> {
        let template = template::load(&config.template.location)?;
        let app_name = config.app_name.as_ref().cloned().unwrap_or_default();

        let mut stack = Self { app_name, template };
        stack.transform_pipeline()?;
        stack.transform_build_project_policy()?;

        return Ok(stack);
    }

    // TODO: supply the target stage layout once the deployment requirements
    // for this pipeline are settled.
    fn transform_pipeline(&mut self) -> Result<(), Error> {
        let pipeline = self
            .template
            .get_resource(PIPELINE_LOGICAL_ID, PIPELINE_KIND)?;
        let _properties: PipelineProperties = pipeline.properties_as()?;

        return Err(Error::NotImplemented("transform_pipeline"));
    }

    // TODO: narrow the build project's statement actions once the required
    // permission set is known.
    fn transform_build_project_policy(&mut self) -> Result<(), Error> {
        let policy = self
            .template
            .get_resource(BUILD_PROJECT_POLICY_LOGICAL_ID, POLICY_KIND)?;
        let _properties: PolicyProperties = policy.properties_as()?;

        return Err(Error::NotImplemented("transform_build_project_policy"));
    }
}
