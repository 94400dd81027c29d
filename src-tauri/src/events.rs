pub const EVENT_ITINERARIES_CHANGED: &str = "itineraries://changed";
