#[cfg(test)]
mod tests {
    use fetchkit::{Error, Request as FetchkitRequest};
    use http_body_util::Full;
    use hyper::{Method, StatusCode};

    use crate::*;

    #[test]
    fn test_unsuccessful_status_codes() {
        const PATH: &str = "errors/unsuccessful_status_codes";

        let _handle = crate::add_hyper_fixture(PATH, |req| async move {
            let mut res = Response::builder();

            if req.method() == Method::GET {
                res = res.status(StatusCode::BAD_REQUEST);
            } else if req.method() == Method::DELETE {
                res = res.status(StatusCode::NOT_FOUND);
            } else if req.method() == Method::PUT {
                res = res.status(StatusCode::INTERNAL_SERVER_ERROR);
            }

            let response = res.body(Full::new(Bytes::from("Error response"))).unwrap();
            (response, Ok(()))
        });

        let client = crate::init_client([]);
        let url = crate::fixture_url(PATH).unwrap();

        let assertions = |status_code: u16, error: Error| match error {
            Error::NonSuccessfulStatusCode(received_status) => {
                assert_eq!(received_status, status_code);
            }
            _ => panic!("Expected NonSuccessfulStatusCode error, got: {error:?}"),
        };

        let err = client
            .get(url.clone())
            .unwrap()
            .with_successful_status()
            .unwrap_err();
        assertions(400, err);

        let err = client
            .request(FetchkitRequest::delete(url.clone()))
            .unwrap()
            .with_successful_status()
            .unwrap_err();
        assertions(404, err);

        let err = client
            .request(FetchkitRequest::put(url))
            .unwrap()
            .with_successful_status()
            .unwrap_err();
        assertions(500, err);
    }

    #[test]
    fn test_successful_status_codes() {
        const PATH: &str = "errors/successful_status_codes";

        let _handle = crate::add_hyper_fixture(PATH, |req| async move {
            let status = match *req.method() {
                Method::GET => StatusCode::OK,
                Method::POST => StatusCode::CREATED,
                _ => StatusCode::NO_CONTENT,
            };
            let response = Response::builder()
                .status(status)
                .body(Full::new(Bytes::new()))
                .unwrap();
            (response, Ok(()))
        });

        let client = crate::init_client([]);
        let url = crate::fixture_url(PATH).unwrap();

        for (req, expected) in [
            (FetchkitRequest::get(url.clone()), 200),
            (FetchkitRequest::post(url.clone()), 201),
            (FetchkitRequest::head(url), 204),
        ] {
            let response = client
                .request(req)
                .unwrap()
                .with_successful_status()
                .unwrap();
            assert_eq!(response.status(), expected);
        }
    }
}
