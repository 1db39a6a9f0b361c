use composer_model::{
    Env, KEY_IMAGE, KEY_SERVICE_NAME, KEY_SERVICE_SPEC_NAME, KEY_STACK_NAME, LABEL_STACK_IMAGE,
    LABEL_STACK_NAMESPACE, Labels, ServiceDefinition,
};

/// Binary every deployed container runs.
pub const PINGER_COMMAND: &str = "/go/bin/pinger";

/// Build the service definition for a network-scoped environment.
///
/// No validation happens here: missing keys produce empty fields.
pub fn build_service_definition(env: &Env, replicas: u64, network: &str) -> ServiceDefinition {
    let image = env.value_or_empty(KEY_IMAGE);

    let mut labels = Labels::new();
    labels
        .insert(LABEL_STACK_IMAGE, image)
        .insert(LABEL_STACK_NAMESPACE, env.value_or_empty(KEY_STACK_NAME));

    ServiceDefinition {
        name: env.value_or_empty(KEY_SERVICE_SPEC_NAME).to_string(),
        image: image.to_string(),
        command: vec![PINGER_COMMAND.to_string()],
        env: env.assignments(),
        replicas,
        network: network.to_string(),
        aliases: vec![env.value_or_empty(KEY_SERVICE_NAME).to_string()],
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::transform::scope_env;

    fn scoped(network: &str) -> Env {
        let mut env = Env::new();
        env.set("STACK_NAME", "app");
        env.set("SERVICE_NAME", "svc");
        env.set("IMAGE", "img:v1");
        scope_env(&mut env, network);
        env
    }

    #[test]
    fn builds_definition_from_scoped_env() {
        let def = build_service_definition(&scoped("net-a"), 3, "net-a");

        assert_eq!(def.name, "app_net-a_svc");
        assert_eq!(def.image, "img:v1");
        assert_eq!(def.command, vec!["/go/bin/pinger"]);
        assert_eq!(def.replicas, 3);
        assert_eq!(def.network, "net-a");
        assert_eq!(def.aliases, vec!["svc"]);
        assert_eq!(def.labels.get("stack.image"), Some("img:v1"));
        assert_eq!(def.labels.get("stack.namespace"), Some("app_net-a"));
        assert_eq!(def.labels.len(), 2);
    }

    #[test]
    fn env_is_serialized_in_environment_order() {
        let def = build_service_definition(&scoped("net-a"), 1, "net-a");
        assert_eq!(
            def.env,
            vec![
                "STACK_NAME=app_net-a",
                "SERVICE_NAME=svc",
                "IMAGE=img:v1",
                "SERVICE_SPEC_NAME=app_net-a_svc",
            ]
        );
    }

    #[test]
    fn empty_env_builds_empty_fields() {
        let def = build_service_definition(&Env::new(), 0, "net-a");
        assert_eq!(def.name, "");
        assert_eq!(def.image, "");
        assert_eq!(def.aliases, vec![""]);
        assert!(def.env.is_empty());
    }
}
