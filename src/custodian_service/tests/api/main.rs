mod document_store;
mod helpers;
