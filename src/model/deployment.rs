use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Target platform of a deployment block. A document holds at most one deployment
/// per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentType {
    DockerCompose,
    Kubernetes,
    Openshift,
}

impl DeploymentType {
    /// Name as written in a `deploymentType` entry.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentType::DockerCompose => "docker-compose",
            DeploymentType::Kubernetes => "kubernetes",
            DeploymentType::Openshift => "openshift",
        }
    }
}

impl fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "docker-compose" => Ok(DeploymentType::DockerCompose),
            "kubernetes" => Ok(DeploymentType::Kubernetes),
            "openshift" => Ok(DeploymentType::Openshift),
            other => Err(other.to_string()),
        }
    }
}

/// Infrastructure descriptor. Independent of the entity graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlDeployment {
    pub deployment_type: DeploymentType,
    pub directory_path: String,
    pub apps_folders: Vec<String>,
    pub clustered_db_apps: Vec<String>,
    pub gateway_type: String,
    pub monitoring: String,
    pub service_discovery_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_repository_name: Option<String>,
    pub docker_push_command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubernetes_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubernetes_service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub istio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openshift_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl JdlDeployment {
    /// Defaults for the given platform.
    #[must_use]
    pub fn defaults_for(deployment_type: DeploymentType) -> Self {
        let kubernetes = deployment_type == DeploymentType::Kubernetes;
        let openshift = deployment_type == DeploymentType::Openshift;
        JdlDeployment {
            deployment_type,
            directory_path: "../".to_string(),
            apps_folders: Vec::new(),
            clustered_db_apps: Vec::new(),
            gateway_type: "SpringCloudGateway".to_string(),
            monitoring: "no".to_string(),
            service_discovery_type: "eureka".to_string(),
            docker_repository_name: None,
            docker_push_command: "docker push".to_string(),
            kubernetes_namespace: kubernetes.then(|| "default".to_string()),
            kubernetes_service_type: kubernetes.then(|| "LoadBalancer".to_string()),
            ingress_domain: None,
            istio: kubernetes.then_some(false),
            openshift_namespace: openshift.then(|| "default".to_string()),
            storage_type: openshift.then(|| "ephemeral".to_string()),
            extra: IndexMap::new(),
        }
    }
}
