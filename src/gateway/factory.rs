use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::gateway::logs::publisher::LogPublisher;

pub(crate) fn create_publisher(config: &Configuration) -> Box<dyn EventPublisher> {
    Box::new(LogPublisher::new(config.branch_id.as_str()))
}
