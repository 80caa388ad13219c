pub mod snippet_routes;
