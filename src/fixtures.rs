/// Push event payload as GitHub delivers it, stripped to the fields we read.
pub(crate) const PUSH: &str = r#"{
    "ref": "refs/head/test-branch",
    "repository": {
        "full_name": "heroku/access-requests"
    },
    "head_commit": {
        "modified": [
            "splunk-users-test.yml"
        ]
    }
}"#;
