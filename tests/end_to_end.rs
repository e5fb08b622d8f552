use std::{net::SocketAddr, sync::Arc};

use poem::{
    Server,
    listener::{Acceptor, Listener, TcpListener},
};
use reading_client::{ApiClient, Command, DEFAULT_TIMEOUT, session};
use reading_progress::{build_app, storage::MemoryBookStore};

async fn spawn_server() -> SocketAddr {
    let acceptor = TcpListener::bind("127.0.0.1:0")
        .into_acceptor()
        .await
        .unwrap();
    let addr = *acceptor.local_addr()[0].as_socket_addr().unwrap();
    let app = build_app(Arc::new(MemoryBookStore::new()), &format!("http://{addr}"));
    tokio::spawn(Server::new_with_acceptor(acceptor).run(app));
    addr
}

#[tokio::test]
async fn demo_scenario_against_running_server() {
    let addr = spawn_server().await;
    let client = ApiClient::new(format!("http://{addr}"), DEFAULT_TIMEOUT).unwrap();

    let mut out = Vec::new();
    session::demo(&client, 1, &mut out).await.unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[0].starts_with("Book added: "));
    assert!(lines[0].contains("\"published\":\"1957-11-23\""));
    assert_eq!(lines[1], "Books:");
    assert_eq!(lines[2], " - 'Doctor Zhivago' (page 2)");
    assert_eq!(lines[3], "Page updated: 25");
    assert!(lines[4].starts_with("1's Book 1234: "));
    assert!(lines[4].contains("\"page\":25"));
    assert_eq!(lines[5], "Book removed");
    assert_eq!(
        lines[6],
        r#"{"status_code":404,"message":"book 1234 not found for user 1"}"#
    );
}

#[tokio::test]
async fn demo_stops_on_conflict() {
    let addr = spawn_server().await;
    let client = ApiClient::new(format!("http://{addr}"), DEFAULT_TIMEOUT).unwrap();

    let add: Command = "add 1 1234 Zhivago Boris Pasternak".parse().unwrap();
    session::execute(&client, add).await.unwrap();

    let mut out = Vec::new();
    let err = session::demo(&client, 1, &mut out).await.unwrap_err();
    assert!(format!("{err:#}").contains("already reading"));
    assert!(out.is_empty());
}

#[tokio::test]
async fn interactive_commands_report_api_errors() {
    let addr = spawn_server().await;
    let client = ApiClient::new(format!("http://{addr}"), DEFAULT_TIMEOUT).unwrap();

    let err = session::execute(&client, "get 3 1".parse().unwrap())
        .await
        .unwrap_err();
    let body = err.api_error().unwrap();
    assert_eq!(body.status_code, 404);
    assert_eq!(body.message, "user 3 not found");

    let listed = session::execute(&client, "list 3".parse().unwrap())
        .await
        .unwrap();
    assert_eq!(listed.as_deref(), Some("Books:"));

    let exit = session::execute(&client, Command::Exit).await.unwrap();
    assert!(exit.is_none());
}
