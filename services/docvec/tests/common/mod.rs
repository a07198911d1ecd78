// Common test utilities and fixtures


// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::TestDocs;
#[allow(unused_imports)]
pub use helpers::{create_test_services, services_for_url, RecordingSink};
