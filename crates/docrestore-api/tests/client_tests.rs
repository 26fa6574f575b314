use docrestore_api::*;

#[test]
fn test_url_building() {
    let client = ApiClient::new("http://localhost:5000");
    assert_eq!(client.documents_url(), "http://localhost:5000/api/documents");
    assert_eq!(
        client.process_pdfs_url(),
        "http://localhost:5000/api/process_pdfs"
    );
    assert_eq!(
        client.pages_url("report.pdf"),
        "http://localhost:5000/api/document/report.pdf/pages"
    );
    assert_eq!(
        client.page_image_url("report.pdf", "page_1.jpg"),
        "http://localhost:5000/api/document/report.pdf/page/page_1.jpg"
    );
}

#[test]
fn test_trailing_slash_is_trimmed() {
    let client = ApiClient::new("http://localhost:5000/");
    assert_eq!(client.base_url(), "http://localhost:5000");
    assert_eq!(client.documents_url(), "http://localhost:5000/api/documents");
}

#[test]
fn test_path_segments_are_percent_encoded() {
    let client = ApiClient::new("http://localhost:5000");
    assert_eq!(
        client.pages_url("annual report 2023.pdf"),
        "http://localhost:5000/api/document/annual%20report%202023.pdf/pages"
    );
    assert_eq!(
        client.page_image_url("a/b.pdf", "page 1.jpg"),
        "http://localhost:5000/api/document/a%2Fb.pdf/page/page%201.jpg"
    );
}

#[test]
fn test_document_list_parsing() {
    let body = r#"{"documents": ["a.pdf", "b.pdf"]}"#;
    let list: DocumentList = serde_json::from_str(body).unwrap();
    assert_eq!(list.documents, vec!["a.pdf", "b.pdf"]);
}

#[test]
fn test_page_list_parsing_preserves_order() {
    let body = r#"{"pages": ["page_1.jpg", "page_2.jpg", "page_10.jpg"]}"#;
    let list: PageList = serde_json::from_str(body).unwrap();
    assert_eq!(list.pages, vec!["page_1.jpg", "page_2.jpg", "page_10.jpg"]);
}

#[test]
fn test_process_outcome_parsing() {
    let body = r#"{"message": "PDF processing completed successfully"}"#;
    let outcome: ProcessOutcome = serde_json::from_str(body).unwrap();
    assert_eq!(outcome.message, "PDF processing completed successfully");
}

#[test]
fn test_error_body_parsing() {
    let body = r#"{"error": "Document not found"}"#;
    let error: ErrorBody = serde_json::from_str(body).unwrap();
    assert_eq!(error.error, "Document not found");
}

#[test]
fn test_server_error_display() {
    let error = ApiError::Server {
        status: 500,
        message: "An error occurred during PDF processing".to_string(),
    };
    let rendered = error.to_string();
    assert!(rendered.contains("500"));
    assert!(rendered.contains("An error occurred during PDF processing"));
}
