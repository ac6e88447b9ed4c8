use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

pub const PIPELINE_KIND: &str = "AWS::CodePipeline::Pipeline";
pub const POLICY_KIND: &str = "AWS::IAM::Policy";

/// Properties of an `AWS::CodePipeline::Pipeline` resource. Only the stage
/// list is modeled; everything else passes through untouched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PipelineProperties {
    #[serde(rename = "Stages")]
    pub stages: Vec<Stage>,

    #[serde(flatten)]
    pub rest: IndexMap<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Stage {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Actions", default)]
    pub actions: Vec<Value>,

    #[serde(flatten)]
    pub rest: IndexMap<String, Value>,
}

/// Properties of an `AWS::IAM::Policy` resource.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PolicyProperties {
    #[serde(rename = "PolicyDocument")]
    pub policy_document: PolicyDocument,

    #[serde(flatten)]
    pub rest: IndexMap<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PolicyDocument {
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(rename = "Statement")]
    pub statement: Vec<Statement>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Statement {
    #[serde(rename = "Effect")]
    pub effect: String,

    #[serde(rename = "Action")]
    pub action: OneOrMany,

    #[serde(rename = "Resource")]
    pub resource: Value,

    #[serde(flatten)]
    pub rest: IndexMap<String, Value>,
}

/// IAM statements allow both `Action: "*"` and `Action: ["a", "b"]`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn contains(&self, needle: &str) -> bool {
        return match self {
            OneOrMany::One(action) => action == needle,
            OneOrMany::Many(actions) => actions.iter().any(|action| action == needle),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::PipelineProperties;
    use super::PolicyProperties;

    #[test]
    fn deserializes_pipeline_properties() {
        let contents = r#"
RoleArn:
  Fn::GetAtt: [PipelineRole, Arn]
Stages:
  - Name: Source
    Actions:
      - Name: Checkout
  - Name: Build
    Actions: []
"#;

        let properties: PipelineProperties = serde_yaml::from_str(contents).unwrap();
        assert_eq!(2, properties.stages.len());
        assert_eq!("Source", properties.stages[0].name);
        assert_eq!("Build", properties.stages[1].name);
        assert_eq!(1, properties.stages[0].actions.len());
        assert_eq!(true, properties.rest.contains_key("RoleArn"));
    }

    #[test]
    fn deserializes_policy_properties() {
        let contents = r#"
PolicyName: BuildProjectPolicy
PolicyDocument:
  Version: "2012-10-17"
  Statement:
    - Effect: Allow
      Action: "*"
      Resource: "*"
    - Effect: Allow
      Action:
        - s3:GetObject
        - s3:PutObject
      Resource: "*"
"#;

        let properties: PolicyProperties = serde_yaml::from_str(contents).unwrap();
        let statements = &properties.policy_document.statement;
        assert_eq!(2, statements.len());
        assert_eq!(true, statements[0].action.contains("*"));
        assert_eq!(false, statements[1].action.contains("*"));
        assert_eq!(true, statements[1].action.contains("s3:GetObject"));
    }
}
