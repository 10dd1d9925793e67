/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use clap::Parser;
use imgur::v3::{Client, Config, UploadOptions, store};

#[derive(Parser, Debug)]
#[command(name = "imgur", version, about = "Upload images to imgur from the command line")]
struct Cli {
    /// Lookup images by ID
    #[arg(short, long, value_name = "ID")]
    info: Vec<String>,

    /// Upload base64-encoded images
    #[arg(short, long, value_name = "DATA")]
    base64: Vec<String>,

    /// Upload URLs
    #[arg(short, long, value_name = "URL")]
    url: Vec<String>,

    /// Upload binary image files (glob patterns allowed)
    #[arg(short, long, value_name = "FILE")]
    file: Vec<String>,

    /// Specify a client ID to use only for the current operation
    #[arg(short, long, value_name = "ID")]
    client_id: Option<String>,

    /// Specify an album ID to upload images to
    #[arg(short, long, value_name = "ID")]
    album_id: Option<String>,

    /// Get information about remaining credits
    #[arg(long)]
    credits: bool,

    /// Save client id to disk for future use
    #[arg(long, value_name = "ID")]
    save: Option<String>,

    /// Remove previously saved client id
    #[arg(long)]
    clear: bool,

    /// Display saved client id
    #[arg(long)]
    show: bool,

    /// Additional files to upload
    #[arg(value_name = "FILE")]
    args: Vec<String>,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::from_env();
    let store_path = store::default_client_id_path();
    if let Ok(saved) = store::load_client_id(&store_path) {
        config.set_client_id(saved.trim());
    }
    if let Some(id) = cli.client_id.as_deref() {
        config.set_client_id(id);
    }

    if cli.show {
        println!("{}", config.client_id());
        return;
    }
    if cli.clear {
        if let Err(err) = store::clear_client_id(&store_path) {
            eprintln!("Unable to clear client id ({err})");
        }
        return;
    }
    if let Some(id) = cli.save.as_deref() {
        if let Err(err) = store::save_client_id(id, &store_path) {
            eprintln!("Unable to save client id ({err})");
        }
        return;
    }

    let client = Client::new(config);

    if cli.credits {
        match client.get_credits().await {
            Ok(credits) => println!("{credits:#?}"),
            Err(err) => eprintln!("Unable to get credit info ({err})"),
        }
        return;
    }

    let files: Vec<String> = cli.file.iter().chain(cli.args.iter()).cloned().collect();
    if !files.is_empty() {
        upload_files(&client, &files, cli.album_id.as_deref()).await;
    }

    for id in &cli.info {
        match client.get_info(id).await {
            Ok(image) => println!("{image:#?}"),
            Err(err) => println!("{err}"),
        }
    }

    for data in &cli.base64 {
        let source = preview(data);
        match client.upload_base64(data, &UploadOptions::default()).await {
            Ok(image) if cli.base64.len() > 1 => println!("{source}... -> {}", image.link),
            Ok(image) => println!("{}", image.link),
            Err(err) => eprintln!("{err} ({source}...)"),
        }
    }

    for url in &cli.url {
        match client.upload_url(url, &UploadOptions::default()).await {
            Ok(image) if cli.url.len() > 1 => println!("{url} -> {}", image.link),
            Ok(image) => println!("{}", image.link),
            Err(err) => eprintln!("{err} ({url})"),
        }
    }
}

/// Uploads the file arguments, creating a fresh album first when more than
/// one file is given without an explicit album id.
async fn upload_files(client: &Client, files: &[String], album_id: Option<&str>) {
    let mut album_field = album_id.map(str::to_string);

    if album_field.is_none() && files.len() > 1 {
        match client.create_album().await {
            Ok(album) => {
                println!("Album -> https://imgur.com/a/{}", album.id);
                // Anonymous albums accept uploads only via their deletehash
                album_field = album.deletehash.or(Some(album.id));
            }
            Err(err) => {
                eprintln!("Unable to create album ({err})");
                return;
            }
        }
    }

    let options = album_field
        .as_deref()
        .map(UploadOptions::with_album)
        .unwrap_or_default();

    for file in files {
        match client.upload_file(file, &options).await {
            Ok(images) => {
                let single = files.len() == 1 && images.len() == 1;
                for image in images {
                    if single {
                        println!("{}", image.link);
                    } else {
                        println!("{file} -> {}", image.link);
                    }
                }
            }
            Err(err) => eprintln!("{err} ({file})"),
        }
    }
}

// First seven characters of a base64 argument, for log-friendly output
fn preview(base64: &str) -> &str {
    match base64.char_indices().nth(7) {
        Some((idx, _)) => &base64[..idx],
        None => base64,
    }
}
