mod source;

pub use source::{ParamSource, RequestParams};
