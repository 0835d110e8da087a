use super::*;

#[test]
fn campaign_decodes_server_field_names() {
    let json = r#"[{"_id":"1","title":"T","description":"D","goalAmount":100,"raisedAmount":40}]"#;
    let campaigns: Vec<Campaign> = serde_json::from_str(json).expect("valid campaign list");
    assert_eq!(campaigns.len(), 1);

    let c = &campaigns[0];
    assert_eq!(c.id, "1");
    assert_eq!(c.title, "T");
    assert_eq!(c.description, "D");
    assert_eq!(c.goal_amount, 100.0);
    assert_eq!(c.raised_amount, 40.0);
}

#[test]
fn campaign_decodes_fractional_amounts() {
    let json = r#"{"_id":"a","title":"t","description":"d","goalAmount":99.5,"raisedAmount":0.25}"#;
    let c: Campaign = serde_json::from_str(json).expect("valid campaign");
    assert_eq!(c.goal_amount, 99.5);
    assert_eq!(c.raised_amount, 0.25);
}

#[test]
fn new_campaign_encodes_server_field_names() {
    let payload = NewCampaign {
        title: "Solar school".to_owned(),
        description: "Panels for the roof".to_owned(),
        goal_amount: 2500.0,
    };
    let value = serde_json::to_value(&payload).expect("serializable");
    assert_eq!(
        value,
        serde_json::json!({
            "title": "Solar school",
            "description": "Panels for the roof",
            "goalAmount": 2500.0,
        })
    );
}

#[test]
fn auth_payloads_encode_expected_fields() {
    let register = RegisterPayload {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let value = serde_json::to_value(&register).expect("serializable");
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "hunter2",
        })
    );

    let login = LoginPayload {
        email: "ada@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let value = serde_json::to_value(&login).expect("serializable");
    assert_eq!(
        value,
        serde_json::json!({
            "email": "ada@example.com",
            "password": "hunter2",
        })
    );
}
