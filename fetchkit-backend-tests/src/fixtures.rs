mod client_options {
    mod certificate_errors;
    mod redirects;
    mod request_timeout;
    mod user_agent;
}

mod errors {
    mod invalid_request;
    mod status_codes;
    mod transport;
}

mod scenarios {
    mod chunked_encoding;
    mod concurrent_clients;
}
