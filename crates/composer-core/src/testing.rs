//! In-memory platform for pipeline tests.
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use composer_model::{Labels, NetworkInfo, NodeInfo, ServiceDefinition, ServiceId};

use crate::platform::{Platform, PlatformError};

#[derive(Default)]
pub struct FakePlatform {
    networks: Vec<NetworkInfo>,
    nodes: Vec<NodeInfo>,
    networks_error: Option<PlatformError>,
    nodes_error: Option<PlatformError>,
    create_error: Option<(usize, PlatformError)>,
    node_listings: AtomicUsize,
    attempted: Mutex<Vec<String>>,
    created: Mutex<Vec<String>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_networks(mut self, list: &[(&str, &str)]) -> Self {
        self.networks = list
            .iter()
            .map(|(name, driver)| NetworkInfo::new(*name, *driver))
            .collect();
        self
    }

    pub fn with_nodes(mut self, list: &[(&str, &str)]) -> Self {
        self.nodes = list
            .iter()
            .map(|(host, role)| NodeInfo::new(*host, *role))
            .collect();
        self
    }

    pub fn failing_networks(mut self, err: PlatformError) -> Self {
        self.networks_error = Some(err);
        self
    }

    pub fn failing_nodes(mut self, err: PlatformError) -> Self {
        self.nodes_error = Some(err);
        self
    }

    /// Fail the create call with index `idx` (zero based).
    pub fn failing_create_at(mut self, idx: usize, err: PlatformError) -> Self {
        self.create_error = Some((idx, err));
        self
    }

    pub fn node_listings(&self) -> usize {
        self.node_listings.load(Ordering::SeqCst)
    }

    /// Names passed to `create_service`, including the failed one.
    pub fn attempted(&self) -> Vec<String> {
        self.attempted.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl Platform for FakePlatform {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn list_networks(&self) -> Result<Vec<NetworkInfo>, PlatformError> {
        match &self.networks_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.networks.clone()),
        }
    }

    async fn list_nodes(&self) -> Result<Vec<NodeInfo>, PlatformError> {
        self.node_listings.fetch_add(1, Ordering::SeqCst);
        match &self.nodes_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.nodes.clone()),
        }
    }

    async fn create_service(&self, def: &ServiceDefinition) -> Result<ServiceId, PlatformError> {
        let idx = {
            let mut attempted = self.attempted.lock().unwrap();
            attempted.push(def.name.clone());
            attempted.len() - 1
        };
        if let Some((fail_at, err)) = &self.create_error {
            if *fail_at == idx {
                return Err(err.clone());
            }
        }
        let mut created = self.created.lock().unwrap();
        if created.contains(&def.name) {
            return Err(PlatformError::Rejected(format!(
                "service {} already exists",
                def.name
            )));
        }
        created.push(def.name.clone());
        Ok(format!("id-{}", def.name))
    }
}

pub fn definition(name: &str) -> ServiceDefinition {
    ServiceDefinition {
        name: name.to_string(),
        image: "img:v1".to_string(),
        command: vec!["/go/bin/pinger".to_string()],
        env: Vec::new(),
        replicas: 1,
        network: format!("net-{name}"),
        aliases: Vec::new(),
        labels: Labels::new(),
    }
}
