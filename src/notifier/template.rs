//! Rendering of the approval notification. The two action links are the only
//! calls to action in both the HTML body and the plain text fallback.

use crate::notifier::ActionLinks;

pub fn render_subject(request_id: &str) -> String {
    format!("[Approval Required] Request #{request_id}")
}

pub fn render_html_body(request_id: &str, links: &ActionLinks) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <style>
        .container {{ max-width: 600px; margin: 20px auto; font-family: Arial, sans-serif; }}
        .button {{
            display: inline-block; padding: 12px 24px;
            margin: 10px; border-radius: 4px; text-decoration: none;
            color: white; font-weight: bold;
        }}
        .approve {{ background-color: #28a745; }}
        .reject {{ background-color: #dc3545; }}
        .footer {{ margin-top: 30px; color: #666; font-size: 0.9em; }}
    </style>
</head>
<body>
    <div class="container">
        <h2>Approval needed for request #{request_id}</h2>
        <p>Please review and take a decision:</p>
        <div>
            <a href="{approve_url}" class="button approve">Approve</a>
            <a href="{reject_url}" class="button reject">Reject</a>
        </div>
        <div class="footer">
            <p>This is an automated message. Do not reply.</p>
        </div>
    </div>
</body>
</html>
"#,
        approve_url = links.approve_url,
        reject_url = links.reject_url,
    )
}

pub fn render_text_body(request_id: &str, links: &ActionLinks) -> String {
    format!(
        "Request #{request_id} is waiting for your review.\n\n\
         To approve it, open: {}\n\
         To reject it, open: {}\n",
        links.approve_url, links.reject_url,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::test_tools::constants::REQUEST_ID_FOR_MOCK_REQUESTS;

    fn links() -> ActionLinks {
        ActionLinks {
            approve_url: "https://example.com/approve?taskToken=tok".to_owned(),
            reject_url: "https://example.com/reject?taskToken=tok".to_owned(),
        }
    }

    #[test]
    fn subject_contains_request_id() {
        let subject = render_subject(REQUEST_ID_FOR_MOCK_REQUESTS);
        assert!(subject.contains(REQUEST_ID_FOR_MOCK_REQUESTS));
    }

    #[test]
    fn html_body_contains_request_id_and_both_links() {
        let links = links();
        let body = render_html_body(REQUEST_ID_FOR_MOCK_REQUESTS, &links);

        assert!(body.contains(REQUEST_ID_FOR_MOCK_REQUESTS));
        assert!(body.contains(&links.approve_url));
        assert!(body.contains(&links.reject_url));
    }

    #[test]
    fn text_body_contains_both_links() {
        let links = links();
        let body = render_text_body(REQUEST_ID_FOR_MOCK_REQUESTS, &links);

        assert!(body.contains(&links.approve_url));
        assert!(body.contains(&links.reject_url));
    }
}
