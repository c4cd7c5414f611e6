// Conversion of AWS SDK errors into BackendError
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{
    DisplayErrorContext,
    ProvideErrorMetadata,
    SdkError,
};
use crate::common::{
    BackendError,
    Fault,
};
use tracing::debug;

/// Service errors carrying an error code become `BackendError::Api`, anything
/// else (dispatch failures, timeouts, unparseable responses) becomes
/// `BackendError::Other`.
impl<E> From<SdkError<E, HttpResponse>> for BackendError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    fn from(err: SdkError<E, HttpResponse>) -> Self {
        let fault = err.raw_response()
            .map(|response| Fault::from_status(response.status().as_u16()))
            .unwrap_or(Fault::Unknown);

        let code = match &err {
            SdkError::ServiceError(_) => err.code(),
            _                         => None,
        };

        match code {
            Some(code) => {
                let message = err.message().unwrap_or_default();

                debug!("API error '{}': '{}' ({})", code, message, fault);

                BackendError::api(code, message, fault)
            },
            None => {
                BackendError::Other(DisplayErrorContext(&err).to_string())
            },
        }
    }
}
