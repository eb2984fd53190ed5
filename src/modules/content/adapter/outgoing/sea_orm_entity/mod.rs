pub mod content_documents;
