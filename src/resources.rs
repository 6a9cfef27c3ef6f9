//! The subset of the core/v1 `ServiceList` schema this tool reads.
//!
//! Every level is `#[serde(default)]`: fields that are missing or `null` in the payload
//! decode to empty values and unknown fields are ignored.

use serde::{
    Deserialize,
    Deserializer,
};

pub const LOAD_BALANCER: &str = "LoadBalancer";

/// Response body of `GET /api/v1/services`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceList {
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Service>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Service {
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    #[serde(deserialize_with = "null_as_default")]
    pub spec: ServiceSpec,
    #[serde(deserialize_with = "null_as_default")]
    pub status: ServiceStatus,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceSpec {
    /// ClusterIP, NodePort, LoadBalancer or ExternalName.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub type_: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ports: Vec<ServicePort>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServicePort {
    #[serde(deserialize_with = "null_as_default")]
    pub port: i32,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceStatus {
    #[serde(rename = "loadBalancer", deserialize_with = "null_as_default")]
    pub load_balancer: LoadBalancerStatus,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadBalancerStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub ingress: Vec<Ingress>,
}

/// One externally assigned address of a load balancer.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Ingress {
    #[serde(deserialize_with = "null_as_default")]
    pub ip: String,
    /// Set instead of `ip` by providers that hand out DNS names (e.g. AWS ELB).
    pub hostname: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Service {
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn ingress(&self) -> &[Ingress] {
        &self.status.load_balancer.ingress
    }

    /// A `LoadBalancer` service that already got at least one ingress address.
    pub fn has_external_address(&self) -> bool {
        self.spec.type_ == LOAD_BALANCER && !self.ingress().is_empty()
    }
}
