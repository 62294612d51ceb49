//! Tests for the command-line export with mocked HTTP responses.

mod common;

use mockito::Server;
use tempfile::TempDir;

use common::{credentials, file, folder, mock_listing, token_mock};
use drive_audio::export::read_csv;
use drive_audio::{extract_to, Authenticator, DriveClient, Extraction};

fn client_for(server_url: &str) -> DriveClient {
    DriveClient::with_base_url(Authenticator::new(credentials(server_url)), server_url)
}

#[tokio::test]
async fn audio_folder_writes_csv_file() {
    let mut server = Server::new_async().await;
    let _token = token_mock(&mut server).create_async().await;
    let _root = mock_listing(
        &mut server,
        "music",
        vec![
            file("m1", "take.mp3", "audio/mpeg"),
            folder("f1", "Vocals"),
            file("m2", "readme.md", "text/markdown"),
        ],
    )
    .await;
    let _vocals = mock_listing(&mut server, "f1", vec![file("v1", "lead.WAV", "audio/wav")]).await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("audio_links.csv");
    let mut stdout = Vec::new();

    let client = client_for(&server.url());
    let extraction = extract_to(&client, "music", Some(output.as_path()), &mut stdout)
        .await
        .unwrap();

    assert_eq!(extraction.row_count(), 2);
    assert!(stdout.is_empty());

    let written = std::fs::read(&output).unwrap();
    let rows = read_csv(written.as_slice()).unwrap();
    let names: Vec<(&str, &str)> = rows
        .iter()
        .map(|row| (row.name.as_str(), row.folder_path.as_str()))
        .collect();
    assert_eq!(names, vec![("take.mp3", ""), ("lead.WAV", "Vocals")]);
}

#[tokio::test]
async fn without_output_path_csv_goes_to_stdout() {
    let mut server = Server::new_async().await;
    let _token = token_mock(&mut server).create_async().await;
    let _root = mock_listing(&mut server, "music", vec![file("m1", "take.mp3", "audio/mpeg")]).await;

    let mut stdout = Vec::new();
    let client = client_for(&server.url());
    let extraction = extract_to(&client, "music", None, &mut stdout).await.unwrap();

    let Extraction::Found { csv, .. } = extraction else {
        panic!("expected rows");
    };
    assert_eq!(stdout, csv);
    assert!(String::from_utf8(stdout).unwrap().starts_with("File Name,Folder Path,"));
}

#[tokio::test]
async fn empty_folder_writes_nothing() {
    let mut server = Server::new_async().await;
    let _token = token_mock(&mut server).create_async().await;
    let _root = mock_listing(&mut server, "quiet", vec![file("d1", "notes.txt", "text/plain")]).await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("audio_links.csv");
    let mut stdout = Vec::new();

    let client = client_for(&server.url());
    let extraction = extract_to(&client, "quiet", Some(output.as_path()), &mut stdout)
        .await
        .unwrap();

    assert!(matches!(extraction, Extraction::Empty));
    assert!(!output.exists());
    assert!(stdout.is_empty());
}

#[tokio::test]
async fn unwritable_output_is_an_error() {
    let mut server = Server::new_async().await;
    let _token = token_mock(&mut server).create_async().await;
    let _root = mock_listing(&mut server, "music", vec![file("m1", "take.mp3", "audio/mpeg")]).await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("missing-dir").join("audio_links.csv");
    let mut stdout = Vec::new();

    let client = client_for(&server.url());
    let result = extract_to(&client, "music", Some(output.as_path()), &mut stdout).await;

    assert!(matches!(result, Err(drive_audio::DriveError::IoError(_))));
}
