use actix_web::web;

use crate::{handlers::snippet_handler, middleware::auth_gate::AuthGate};

pub fn config(config: &mut web::ServiceConfig, auth_gate: AuthGate) {
    config.service(
        web::scope("/snippets")
            .service(snippet_handler::list_snippets)
            .service(snippet_handler::create_snippet)
            .service(snippet_handler::update_snippet)
            .service(snippet_handler::delete_snippet)
            .service(snippet_handler::bookmark_snippet)
            .service(snippet_handler::star_snippet)
            .wrap(auth_gate),
    );
}
