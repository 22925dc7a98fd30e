use super::collector::MetricCollector;
use super::types::{CollectorOutcome, NETWORK_INFORMATION};

/// Fixed body of the network section
pub const NETWORK_REDACTION_NOTICE: &str = "**omitted due to security restrictions**";

/// Network section placeholder.
///
/// Interfaces and counters are never queried; the section always carries
/// the redaction notice.
pub struct NetworkCollector;

impl MetricCollector for NetworkCollector {
    fn title(&self) -> &'static str {
        NETWORK_INFORMATION
    }

    fn collect(&mut self) -> CollectorOutcome {
        CollectorOutcome::Collected(vec![NETWORK_REDACTION_NOTICE.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_is_redacted() {
        let mut collector = NetworkCollector;
        assert_eq!(collector.title(), "Network Information");
        match collector.collect() {
            CollectorOutcome::Collected(lines) => {
                assert_eq!(lines, vec!["**omitted due to security restrictions**"])
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
