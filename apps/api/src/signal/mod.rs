// Source location + message recovery over HTTP.
// Handlers collect readings and hand primitive values to `locator` and `message`.

pub mod decode;
pub mod handlers;
