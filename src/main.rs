use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use playlist_manager::config::DEFAULT_STORAGE_ROOT;
use playlist_manager::importer::{LoftyTagSource, MusicCrawler};
use playlist_manager::{Error, LibraryConfig, PlaylistStore};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playlist-manager")]
#[command(about = "Build, inspect and play through stored playlists", long_about = None)]
struct Args {
    /// Directory playlists are stored in
    #[arg(short = 'r', long, default_value = DEFAULT_STORAGE_ROOT, global = true)]
    root: String,

    /// Verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a playlist from the audio files in a directory and save it
    Import {
        /// Directory to scan
        dir: String,

        /// Playlist name
        #[arg(short = 'n', long)]
        name: String,

        /// Wrap around after the last song
        #[arg(long)]
        repeat: bool,

        /// Play songs in random order
        #[arg(long)]
        shuffle: bool,

        /// Also scan subdirectories
        #[arg(long)]
        recursive: bool,

        /// Do not follow symlinks while scanning
        #[arg(long)]
        no_follow_links: bool,

        /// File extensions to import (can be specified multiple times)
        #[arg(long = "ext", default_value = "mp3")]
        extensions: Vec<String>,
    },

    /// Show the songs of a stored playlist
    Show {
        /// Playlist file name (e.g. My-Playlist.json)
        file: String,

        /// Show song lengths in this unit (seconds, minutes or hours)
        #[arg(long = "unit")]
        units: Vec<String>,
    },

    /// Advance through a stored playlist, printing each song
    Play {
        /// Playlist file name (e.g. My-Playlist.json)
        file: String,

        /// Number of songs to advance
        #[arg(short = 'c', long, default_value = "1")]
        count: usize,
    },

    /// List stored playlist files
    List,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let root = PathBuf::from(shellexpand::tilde(&args.root).as_ref());
    let config = LibraryConfig::new(root);
    let store = PlaylistStore::new(config.storage_root.clone());

    match args.command {
        Command::Import {
            dir,
            name,
            repeat,
            shuffle,
            recursive,
            no_follow_links,
            extensions,
        } => {
            let dir = PathBuf::from(shellexpand::tilde(&dir).as_ref());
            let config = config
                .with_extensions(extensions)
                .with_recursive(recursive)
                .with_follow_links(!no_follow_links);

            let crawler = MusicCrawler::new(dir.clone(), config, LoftyTagSource::new());
            let playlist = crawler
                .create_playlist(&name, repeat, shuffle)
                .with_context(|| format!("Failed to import {:?}", dir))?;
            let path = store.save(&playlist).context("Failed to save playlist")?;

            log::info!("Saved {} song(s) to {:?}", playlist.len(), path);
        }

        Command::Show { file, units } => {
            let playlist = store
                .load(&file)
                .with_context(|| format!("Failed to load playlist {:?}", file))?;

            println!(
                "{} (repeat: {}, shuffle: {})",
                playlist.name,
                playlist.repeat,
                playlist.shuffle()
            );
            for song in playlist.songs() {
                let length = song.length_query(units.as_slice())?;
                println!("  {} - {} [{}] {}", song.artist(), song.title(), song.album(), length);
            }
            println!("Total length: {}", playlist.total_length());

            let mut counts: Vec<_> = playlist.artist_counts().into_iter().collect();
            counts.sort();
            for (artist, count) in counts {
                println!("  {}: {}", artist, count);
            }
        }

        Command::Play { file, count } => {
            let mut playlist = store
                .load(&file)
                .with_context(|| format!("Failed to load playlist {:?}", file))?;

            if let Some(song) = playlist.current_song() {
                println!("Now playing: {}", song);
            }
            for _ in 0..count {
                match playlist.advance() {
                    Ok(song) => println!("Now playing: {}", song),
                    Err(Error::EndOfPlaylist) => {
                        log::info!("Reached end of playlist");
                        break;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        Command::List => {
            for name in store.list().context("Failed to list playlists")? {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
