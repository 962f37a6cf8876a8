//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` impls connecting them live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::quizzes::QuizFormError;
use crate::repository::RepositoryError;
#[cfg(feature = "server")]
use crate::routes::errors::ApiError;
#[cfg(feature = "server")]
use crate::services::ServiceError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<QuizFormError> for ServiceError {
    fn from(val: QuizFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<ServiceError> for ApiError {
    fn from(val: ServiceError) -> Self {
        match val {
            ServiceError::Unauthorized => ApiError::Unauthorized,
            ServiceError::NotFound => ApiError::NotFound,
            ServiceError::Form(_) | ServiceError::TypeConstraint(_) => ApiError::BadRequest,
            ServiceError::Internal => ApiError::Internal,
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_api_errors() {
        assert_eq!(ApiError::from(ServiceError::NotFound), ApiError::NotFound);
        assert_eq!(
            ApiError::from(ServiceError::Form("missing field".into())),
            ApiError::BadRequest
        );
        assert_eq!(
            ApiError::from(ServiceError::TypeConstraint("id".into())),
            ApiError::BadRequest
        );
        assert_eq!(ApiError::from(ServiceError::Internal), ApiError::Internal);
        assert_eq!(
            ApiError::from(ServiceError::Unauthorized),
            ApiError::Unauthorized
        );
    }

    #[test]
    fn form_errors_become_form_service_errors() {
        let err: ServiceError = QuizFormError::Validation("id".into()).into();
        assert!(matches!(err, ServiceError::Form(_)));
    }
}
