//! Shared helpers for client integration tests

#![allow(dead_code)]

use ecsapi::{ClientConfig, EcsApi, Env, Protocol};

pub const TOKEN: &str = "abcde";

/// Client pointed at a mockito server, with prefix "api"
pub fn api_for(server: &mockito::ServerGuard) -> EcsApi {
    api_with_token(server, TOKEN)
}

pub fn api_with_token(server: &mockito::ServerGuard, token: &str) -> EcsApi {
    let host_with_port = server.host_with_port();
    let (host, port) = host_with_port
        .rsplit_once(':')
        .expect("mockito address has a port");

    let config = ClientConfig::builder()
        .token(token)
        .host(host)
        .port(port.parse().expect("numeric port"))
        .prefix("api")
        .protocol(Protocol::Http)
        .build_with(&Env::default())
        .expect("valid test config");

    EcsApi::new(config)
}

pub const SERVER: &str = r#"{
    "name": "ec200410",
    "ipv4": "203.0.113.10",
    "ipv6": "2001:db8::10",
    "group": null,
    "plan": "eCS1",
    "plan_size": {
        "core": "1",
        "ram": "1024",
        "disk": "20",
        "gpu": "0",
        "gpu_label": null,
        "host_type": "ECS"
    },
    "reserved_plans": [
        {
            "id": 3,
            "plan": "M12PeCS1",
            "months": 12,
            "price": 99.0,
            "start_date": "2024-01-01T00:00:00Z",
            "end_date": "2025-01-01T00:00:00Z"
        }
    ],
    "last_restored_snapshot": null,
    "is_reserved": true,
    "reserved_until": "2025-01-01T00:00:00Z",
    "support": {"id": 1, "name": "global", "price": 5.0},
    "location": "it-fr2",
    "location_label": "Frosinone",
    "notes": "test",
    "so": "almalinux-9",
    "so_label": "AlmaLinux 9",
    "creation_date": "2024-01-01T10:00:00Z",
    "deletion_date": null,
    "active_flag": true,
    "status": "Booted",
    "progress": 100,
    "api_version": "v2",
    "api_version_value": 2,
    "user": "admin"
}"#;

pub fn server_response() -> String {
    format!(r#"{{"status": "ok", "server": {}}}"#, SERVER)
}

pub fn servers_response() -> String {
    format!(r#"{{"status": "ok", "count": 1, "server": [{}]}}"#, SERVER)
}

pub const SERVER_CREATE_RESPONSE: &str = r#"{
    "status": "ok",
    "action_id": 1234,
    "server": {"name": "ec200411", "ipv4": null, "ipv6": null}
}"#;

pub const SERVER_STATUS_RESPONSE: &str = r#"{
    "status": "ok",
    "server": {"name": "ec200410", "status": "Booted", "progress": 100}
}"#;

pub fn action(id: u64, status: &str) -> String {
    format!(
        r#"{{
            "id": {id},
            "status": "{status}",
            "user": "admin",
            "created_at": "2024-03-01T10:00:00Z",
            "started_at": null,
            "completed_at": null,
            "resource": "ec200410",
            "resource_type": "ECS",
            "type": "create",
            "progress": 0
        }}"#
    )
}

pub fn action_response(id: u64, status: &str) -> String {
    format!(r#"{{"status": "ok", "action": {}}}"#, action(id, status))
}

pub fn actions_response() -> String {
    format!(
        r#"{{"status": "ok", "actions": [{}, {}]}}"#,
        action(1, "completed"),
        action(2, "running")
    )
}

pub const PLANS_RESPONSE: &str = r#"{
    "status": "ok",
    "plans": [
        {
            "id": 1,
            "name": "eCS1",
            "cpu": "1",
            "ram": "1024",
            "disk": "20",
            "gpu": "0",
            "gpu_label": "",
            "hourly_price": 0.013,
            "montly_price": 9.95,
            "windows": false,
            "host_type": "ECS",
            "available": true,
            "available_regions": [
                {"id": 1, "location": "it-fr2", "description": "Frosinone"},
                {"id": 2, "location": "it-mi2", "description": "Milano"}
            ]
        },
        {
            "id": 7,
            "name": "ECS1GPU6",
            "cpu": "8",
            "ram": "65536",
            "disk": "200",
            "gpu": "1",
            "gpu_label": "A6000",
            "hourly_price": 1.2,
            "montly_price": 860.0,
            "windows": false,
            "host_type": "GPU",
            "available": true,
            "available_regions": [
                {"id": 1, "location": "it-fr2", "description": "Frosinone"}
            ]
        }
    ]
}"#;

pub const REGIONS_RESPONSE: &str = r#"{
    "status": "ok",
    "regions": [
        {"id": 1, "location": "it-fr2", "description": "Frosinone"},
        {"id": 2, "location": "it-mi2", "description": "Milano"}
    ]
}"#;

pub const IMAGES_RESPONSE: &str = r#"{
    "status": "ok",
    "images": [
        {
            "id": 9,
            "name": "almalinux-9",
            "creation_date": "2023-06-01T00:00:00Z",
            "deletion_date": null,
            "active_flag": true,
            "status": "ok",
            "uuid": "0b6c2f0e-1c1e-4d2a-9f7b-111111111111",
            "description": "AlmaLinux 9",
            "notes": "",
            "public": true,
            "cloud_image": false,
            "so_base": "linux",
            "required_disk": 10,
            "api_version": "v2",
            "api_version_value": 2,
            "version": "9.3"
        }
    ]
}"#;

pub const TEMPLATE: &str = r#"{
    "id": 593,
    "name": "dear",
    "creation_date": "2024-02-01T00:00:00Z",
    "deletion_date": null,
    "active_flag": true,
    "status": "ok",
    "uuid": "6d1f2e1a-2a2b-4c4d-8e8f-222222222222",
    "notes": "stars"
}"#;

pub fn template_response() -> String {
    format!(r#"{{"status": "ok", "template": {}}}"#, TEMPLATE)
}

pub fn templates_response() -> String {
    format!(r#"{{"status": "ok", "templates": [{}]}}"#, TEMPLATE)
}

pub fn template_create_response() -> String {
    format!(
        r#"{{"status": "ok", "action_id": 4321, "template": {}}}"#,
        TEMPLATE
    )
}

pub const SCRIPT: &str = r#"{
    "id": 15,
    "user": "admin",
    "title": "title",
    "content": "content",
    "windows": false,
    "public": false,
    "category": "custom"
}"#;

pub fn script_response() -> String {
    format!(r#"{{"status": "ok", "script": {}}}"#, SCRIPT)
}

pub fn scripts_response() -> String {
    format!(r#"{{"status": "ok", "scripts": [{}]}}"#, SCRIPT)
}

pub const SSH_KEY: &str = r#"{
    "id": 123,
    "label": "my-secret-key",
    "key": "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAITEST test-key",
    "user": "admin"
}"#;

pub fn ssh_key_response() -> String {
    format!(r#"{{"status": "ok", "key": {}}}"#, SSH_KEY)
}

pub fn ssh_keys_response() -> String {
    format!(r#"{{"status": "ok", "keys": [{}]}}"#, SSH_KEY)
}
