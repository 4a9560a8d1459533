mod load_request;

pub use load_request::{RenderRequest, RequestFormat, load_request, parse_request_content};
