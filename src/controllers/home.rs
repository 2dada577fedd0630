//! The default `Home` controller.
//!
//! An empty application skeleton ships exactly two actions: the landing
//! page and the error page the exception handler redirects to. Real
//! applications replace these.

use axum::response::{Html, IntoResponse, Response};

use crate::routing::{ActionContext, ActionError, ControllerRegistry};

/// Register the controller's actions.
pub fn register(registry: &mut ControllerRegistry) {
    registry.register("Home", "Index", index);
    registry.register("Home", "Error", error);
}

/// `GET /` and `GET /Home/Index`: the landing page.
async fn index(_ctx: ActionContext) -> Result<Response, ActionError> {
    Ok(Html(
        "<!DOCTYPE html>\n<html>\n<head>\
         <title>Welcome</title>\
         <link rel=\"stylesheet\" href=\"/site.css\">\
         </head>\n<body>\n<h1>Welcome</h1>\n\
         <p>This application has no content yet.</p>\n</body>\n</html>\n",
    )
    .into_response())
}

/// `/Home/Error`: the page unhandled failures redirect to.
async fn error(_ctx: ActionContext) -> Result<Response, ActionError> {
    Ok(Html(
        "<!DOCTYPE html>\n<html>\n<head><title>Error</title></head>\n<body>\n\
         <h1>Error</h1>\n\
         <p>An error occurred while processing your request.</p>\n</body>\n</html>\n",
    )
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteValues;
    use axum::http::{HeaderMap, Method};

    fn context(path: &str) -> ActionContext {
        ActionContext {
            route: RouteValues::resolve(path).unwrap(),
            method: Method::GET,
            headers: HeaderMap::new(),
        }
    }

    #[tokio::test]
    async fn test_index_serves_html() {
        let mut registry = ControllerRegistry::new();
        register(&mut registry);

        let values = RouteValues::resolve("/").unwrap();
        let handler = registry.lookup(&values).unwrap();
        let response = handler(context("/")).await.unwrap();

        assert_eq!(response.status(), 200);
        let content_type = response.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_error_page_is_registered() {
        let mut registry = ControllerRegistry::new();
        register(&mut registry);

        let values = RouteValues::resolve("/Home/Error").unwrap();
        assert!(registry.lookup(&values).is_some());
    }
}
