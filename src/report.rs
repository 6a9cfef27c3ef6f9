use crate::resources::{
    Ingress,
    Service,
    ServiceList,
};
use std::io::{
    self,
    Write,
};

/// Services in `list` that are `LoadBalancer`s with at least one ingress address, in server
/// order.
pub fn load_balancers(list: &ServiceList) -> impl Iterator<Item = &Service> + '_ {
    list.items.iter().filter(|svc| svc.has_external_address())
}

pub fn external_ips(ingress: &[Ingress]) -> String {
    ingress.iter().map(|i| i.ip.as_str()).collect::<Vec<_>>().join(", ")
}

/// Writes one block per matching service and returns how many were written.
pub fn write_report(out: &mut impl Write, list: &ServiceList) -> io::Result<usize> {
    let mut written = 0;
    for svc in load_balancers(list) {
        trace!(name = svc.name(), "reporting service");
        writeln!(out, "Service: {}", svc.name())?;
        writeln!(out, "External IP(s): {}", external_ips(svc.ingress()))?;
        for port in &svc.spec.ports {
            writeln!(out, "Port: {}", port.port)?;
        }
        writeln!(out, "---")?;
        written += 1;
    }
    Ok(written)
}

pub fn render(list: &ServiceList) -> io::Result<String> {
    let mut buf = Vec::new();
    write_report(&mut buf, list)?;
    String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
