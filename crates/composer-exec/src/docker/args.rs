use composer_model::ServiceDefinition;

/// Arguments for `docker service create` (without the binary).
///
/// Empty aliases are left out of the network attachment. Its fields use
/// docker's CSV syntax and are quoted when they contain `,` or `"`.
pub fn service_create_args(def: &ServiceDefinition) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "service".into(),
        "create".into(),
        "--detach".into(),
        "--name".into(),
        def.name.clone(),
        "--replicas".into(),
        def.replicas.to_string(),
    ];

    let mut network = csv_field(&format!("name={}", def.network));
    for alias in def.aliases.iter().filter(|a| !a.is_empty()) {
        network.push(',');
        network.push_str(&csv_field(&format!("alias={alias}")));
    }
    args.push("--network".into());
    args.push(network);

    for (key, value) in def.labels.iter() {
        args.push("--label".into());
        args.push(format!("{key}={value}"));
    }
    for assignment in &def.env {
        args.push("--env".into());
        args.push(assignment.clone());
    }

    args.push(def.image.clone());
    args.extend(def.command.iter().cloned());
    args
}

/// Quote one CSV field, doubling embedded quotes, when it needs it.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
