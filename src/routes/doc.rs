use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    analysis::ExtractedOrder,
    dto::{
        analysis::{AnalysisBody, ScreenshotForm},
        auth::LoginRequest,
        imports::UploadForm,
    },
    models::{Order, PaymentState},
    response::{ErrorBody, ImportSummary, OrderBody, SuccessBody},
    routes::{admin, auth, health, imports, orders},
    session::SESSION_COOKIE,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "admin_session",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::logout,
        auth::verify,
        admin::analyze_screenshots,
        imports::upload_excel,
        orders::search_order
    ),
    components(
        schemas(
            Order,
            PaymentState,
            LoginRequest,
            UploadForm,
            ScreenshotForm,
            ExtractedOrder,
            AnalysisBody,
            ErrorBody,
            SuccessBody,
            OrderBody,
            ImportSummary,
            health::HealthData
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Admin", description = "Admin session and screenshot endpoints"),
        (name = "Import", description = "Spreadsheet import"),
        (name = "Orders", description = "Public order lookup"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
