//! OpenAPI documentation aggregate.

use utoipa::OpenApi;

use crate::api::dto::{CallDto, DepartmentDto, OperatorDto};
use crate::api::handlers::system::HealthResponse;
use crate::error::{ErrorBody, ErrorResponse};

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::departments::list_departments,
        crate::api::handlers::operators::list_operators,
        crate::api::handlers::operators::get_operator,
        crate::api::handlers::calls::list_calls,
        crate::api::handlers::calls::get_call,
        crate::api::handlers::system::health_handler,
    ),
    components(
        schemas(
            DepartmentDto,
            OperatorDto,
            CallDto,
            HealthResponse,
            ErrorResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "Departments", description = "Department directory"),
        (name = "Operators", description = "Operator directory with pagination and filters"),
        (name = "Calls", description = "Call records with pagination and filters"),
        (name = "System", description = "Service health"),
    ),
    info(
        title = "Calldesk Gateway API",
        version = "0.1.0",
        description = "Read-only, paginated query API over call-center departments, operators and calls",
        license(name = "MIT"),
    )
)]
pub struct ApiDoc;
