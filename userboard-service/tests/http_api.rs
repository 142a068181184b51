// End-to-end checks of the reqwest adapter against a scripted TCP stub

use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use userboard_service::{
    ApiError, ClientConfig, HttpUserApi, User, UserApi, UserDirectory, UserDraft,
};

#[derive(Debug)]
struct Recorded {
    method: String,
    path: String,
    head: String,
    body: String,
}

/// Serve one scripted response per connection, in order, then return what
/// the client sent
async fn stub(responses: Vec<(&'static str, &'static str)>) -> (String, JoinHandle<Vec<Recorded>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let mut recorded = Vec::new();
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            recorded.push(read_request(&mut socket).await);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        }
        recorded
    });

    (origin, handle)
}

async fn read_request(socket: &mut TcpStream) -> Recorded {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before request headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim() == "content-length")
        .map(|(_, value)| value.trim().parse::<usize>().unwrap())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before request body");
        buf.extend_from_slice(&chunk[..n]);
    }

    let raw_head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut request_line = raw_head.split_whitespace();
    let method = request_line.next().unwrap().to_string();
    let path = request_line.next().unwrap().to_string();
    let body = String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string();

    Recorded {
        method,
        path,
        head,
        body,
    }
}

fn api(origin: &str) -> HttpUserApi {
    HttpUserApi::new(&ClientConfig::new(origin, "go")).unwrap()
}

fn json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
async fn test_list_users() {
    let (origin, server) = stub(vec![(
        "200 OK",
        r#"[{"id":1,"name":"John Doe","email":"john@example.com"},{"id":2,"name":"Jane Doe","email":"jane@example.com"}]"#,
    )])
    .await;

    let users = api(&origin).list_users().await.unwrap();
    let requests = server.await.unwrap();

    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/go/users");
    assert_eq!(
        users,
        vec![
            User::new(1, "John Doe", "john@example.com"),
            User::new(2, "Jane Doe", "jane@example.com"),
        ]
    );
}

#[tokio::test]
async fn test_get_user() {
    let (origin, server) = stub(vec![(
        "200 OK",
        r#"{"id":1,"name":"John Doe","email":"john@example.com"}"#,
    )])
    .await;

    let user = api(&origin).get_user("1").await.unwrap();
    let requests = server.await.unwrap();

    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/go/users/1");
    assert_eq!(user.name, "John Doe");
}

#[tokio::test]
async fn test_create_user_posts_draft() {
    let (origin, server) = stub(vec![(
        "201 Created",
        r#"{"id":1,"name":"New User","email":"new@example.com"}"#,
    )])
    .await;

    let user = api(&origin)
        .create_user(&UserDraft::new("New User", "new@example.com"))
        .await
        .unwrap();
    let requests = server.await.unwrap();

    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/go/users");
    assert!(requests[0].head.contains("content-type: application/json"));
    assert_eq!(
        json(&requests[0].body),
        serde_json::json!({"name": "New User", "email": "new@example.com"})
    );
    assert_eq!(user.id, 1);
}

#[tokio::test]
async fn test_update_user_ignores_response_body() {
    let (origin, server) = stub(vec![(
        "200 OK",
        r#"{"id":1,"name":"Updated User","email":"updated@example.com"}"#,
    )])
    .await;

    api(&origin)
        .update_user("1", &UserDraft::new("Updated User", "updated@example.com"))
        .await
        .unwrap();
    let requests = server.await.unwrap();

    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/api/go/users/1");
    assert_eq!(
        json(&requests[0].body),
        serde_json::json!({"name": "Updated User", "email": "updated@example.com"})
    );
}

#[tokio::test]
async fn test_delete_user() {
    let (origin, server) = stub(vec![("200 OK", r#""User deleted""#)]).await;

    api(&origin).delete_user("1").await.unwrap();
    let requests = server.await.unwrap();

    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/api/go/users/1");
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_error_status_is_a_failure() {
    let (origin, server) = stub(vec![("500 Internal Server Error", "")]).await;

    let result = api(&origin).delete_user("9").await;
    server.await.unwrap();

    match result {
        Err(ApiError::Status { status, .. }) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let result = api(&origin).list_users().await;
    assert!(matches!(result, Err(ApiError::Http(_))));
}

#[tokio::test]
async fn test_directory_refetches_after_create() {
    let (origin, server) = stub(vec![
        ("200 OK", "[]"),
        (
            "201 Created",
            r#"{"id":1,"name":"New User","email":"new@example.com"}"#,
        ),
        (
            "200 OK",
            r#"[{"id":1,"name":"New User","email":"new@example.com"}]"#,
        ),
    ])
    .await;

    let mut directory = UserDirectory::new(Arc::new(api(&origin)));
    directory.refresh();
    directory.wait_idle().await;
    assert!(directory.users().is_empty());

    directory.create(UserDraft::new("New User", "new@example.com"));
    directory.wait_idle().await;

    let requests = server.await.unwrap();
    let methods: Vec<&str> = requests.iter().map(|r| r.method.as_str()).collect();
    assert_eq!(methods, vec!["GET", "POST", "GET"]);
    assert_eq!(directory.users()[0].name, "New User");
}
