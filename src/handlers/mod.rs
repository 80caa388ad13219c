pub mod snippet_handler;
