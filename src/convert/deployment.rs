use super::values::ConfigValue;
use crate::error::{ConversionError, ConversionResult};
use crate::model::{DeploymentType, JdlDeployment};
use crate::parsed::ParsedDeployment;

/// Convert parsed deployment blocks, filling per-platform defaults.
///
/// Known keys are typed onto [`JdlDeployment`]; anything else is kept in `extra`.
///
/// # Errors
///
/// - [`ConversionError::MissingInput`] when `deployments` is absent
/// - [`ConversionError::MissingDeploymentType`] / [`ConversionError::UnknownDeploymentType`]
///   for a block without a usable `deploymentType`
/// - [`ConversionError::InvalidConfigValue`] when a known key has the wrong shape
pub fn convert_deployments(deployments: Option<&[ParsedDeployment]>) -> ConversionResult<Vec<JdlDeployment>> {
    let deployments = deployments.ok_or_else(|| ConversionError::missing("Deployments"))?;
    deployments.iter().map(convert_deployment).collect()
}

fn convert_deployment(raw: &ParsedDeployment) -> ConversionResult<JdlDeployment> {
    let raw_type = raw
        .get("deploymentType")
        .ok_or(ConversionError::MissingDeploymentType)?;
    let deployment_type = ConfigValue::new("a deployment", "deploymentType", raw_type)
        .string()?
        .parse::<DeploymentType>()
        .map_err(|value| ConversionError::UnknownDeploymentType { value })?;

    let owner = deployment_type.as_str();
    let mut deployment = JdlDeployment::defaults_for(deployment_type);
    for (key, value) in raw {
        let value_of = ConfigValue::new(owner, key, value);
        match key.as_str() {
            "deploymentType" => {}
            "directoryPath" => deployment.directory_path = value_of.string()?,
            "appsFolders" => deployment.apps_folders = value_of.string_list()?,
            "clusteredDbApps" => deployment.clustered_db_apps = value_of.string_list()?,
            "gatewayType" => deployment.gateway_type = value_of.string()?,
            "monitoring" => deployment.monitoring = value_of.string()?,
            "serviceDiscoveryType" => deployment.service_discovery_type = value_of.string()?,
            "dockerRepositoryName" => deployment.docker_repository_name = Some(value_of.string()?),
            "dockerPushCommand" => deployment.docker_push_command = value_of.string()?,
            "kubernetesNamespace" => deployment.kubernetes_namespace = Some(value_of.string()?),
            "kubernetesServiceType" => {
                deployment.kubernetes_service_type = Some(value_of.string()?)
            }
            "ingressDomain" => deployment.ingress_domain = Some(value_of.string()?),
            "istio" => deployment.istio = Some(value_of.boolean()?),
            "openshiftNamespace" => deployment.openshift_namespace = Some(value_of.string()?),
            "storageType" => deployment.storage_type = Some(value_of.string()?),
            _ => {
                deployment.extra.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(deployment)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use serde_json::json;

    fn deployment(value: serde_json::Value) -> ParsedDeployment {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_docker_compose_with_overrides() {
        let parsed = deployment(json!({
            "deploymentType": "docker-compose",
            "appsFolders": ["store", "invoice"],
            "monitoring": "prometheus",
            "dockerRepositoryName": "registry.local"
        }));
        let converted = convert_deployments(Some(&[parsed][..])).unwrap();
        let compose = &converted[0];
        assert_eq!(compose.deployment_type, DeploymentType::DockerCompose);
        assert_eq!(compose.apps_folders, vec!["store", "invoice"]);
        assert_eq!(compose.monitoring, "prometheus");
        assert_eq!(compose.directory_path, "../");
        assert_eq!(compose.docker_repository_name.as_deref(), Some("registry.local"));
        assert!(compose.kubernetes_namespace.is_none());
    }

    #[test]
    fn test_kubernetes_defaults() {
        let parsed = deployment(json!({"deploymentType": "kubernetes", "istio": "true"}));
        let converted = convert_deployments(Some(&[parsed][..])).unwrap();
        let kubernetes = &converted[0];
        assert_eq!(kubernetes.kubernetes_namespace.as_deref(), Some("default"));
        assert_eq!(kubernetes.kubernetes_service_type.as_deref(), Some("LoadBalancer"));
        assert_eq!(kubernetes.istio, Some(true));
    }

    #[test]
    fn test_deployment_type_is_required_and_checked() {
        let err = convert_deployments(Some(&[deployment(json!({"monitoring": "no"}))][..]))
            .unwrap_err();
        assert_eq!(err, ConversionError::MissingDeploymentType);

        let err = convert_deployments(Some(&[deployment(json!({"deploymentType": "heroku"}))][..]))
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownDeploymentType {
                value: "heroku".to_string()
            }
        );
        assert!(convert_deployments(None).unwrap_err().is_missing_input());
    }
}
