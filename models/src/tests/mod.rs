mod access_rule;
mod builders;
mod error_response;
mod json;
