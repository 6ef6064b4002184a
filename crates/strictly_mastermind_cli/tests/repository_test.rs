//! Tests for the JSON game repository.

use strictly_mastermind::{Feedback, Game, GameConfiguration, GameError, GameMode};
use strictly_mastermind_cli::{GameRepository, validate_id};
use tempfile::TempDir;

/// Opens a repository in a fresh temporary directory. The directory handle must
/// stay in scope to keep the files alive.
fn setup_repo() -> (TempDir, GameRepository) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let repo = GameRepository::open(dir.path().join("games")).expect("Failed to open repository");
    (dir, repo)
}

fn sample_game() -> Game {
    let mut game = Game::new(GameConfiguration::new(6, 4, 10, GameMode::CVP).unwrap());
    game.bind_secret_code([1, 2, 3, 4].into()).unwrap();
    game.service()
        .add_round([1, 1, 2, 2].into(), Feedback::new(1, 1))
        .unwrap();
    game.service()
        .add_round([3, 4, 5, 6].into(), Feedback::new(0, 2))
        .unwrap();
    game
}

#[test]
fn test_add_and_load_preserves_round_order() {
    let (_dir, repo) = setup_repo();
    let game = sample_game();

    let id = repo.add(&game).expect("Add failed");
    assert!(validate_id(&id).is_ok());

    let loaded = repo.load(&id).expect("Load failed");
    assert_eq!(loaded.board().rounds(), game.board().rounds());
    assert_eq!(loaded.state(), game.state());
    assert_eq!(loaded.entities().secret_code(), game.entities().secret_code());
}

#[test]
fn test_reloaded_game_has_no_redo() {
    let (_dir, repo) = setup_repo();
    let mut game = sample_game();
    game.service().undo().unwrap();
    let id = repo.add(&game).unwrap();

    let mut loaded = repo.load(&id).unwrap();
    assert_eq!(loaded.board().len(), 1);
    assert_eq!(loaded.service().redo(), Err(GameError::NoRedoAvailable));
}

#[test]
fn test_save_requires_existing_game() {
    let (_dir, repo) = setup_repo();
    let mut game = sample_game();
    assert!(repo.save("ABCDEF", &game).is_err());

    let id = repo.add(&game).unwrap();
    game.service()
        .add_round([1, 2, 3, 4].into(), Feedback::perfect(4))
        .unwrap();
    repo.save(&id, &game).expect("Save failed");

    let loaded = repo.load(&id).unwrap();
    assert!(loaded.state().game_over());
}

#[test]
fn test_delete_and_exists() {
    let (_dir, repo) = setup_repo();
    let id = repo.add(&sample_game()).unwrap();
    assert!(repo.exists(&id).unwrap());

    repo.delete(&id).expect("Delete failed");

    assert!(!repo.exists(&id).unwrap());
    assert!(repo.load(&id).is_err());
    assert!(repo.delete(&id).is_err());
}

#[test]
fn test_malformed_ids_rejected() {
    let (_dir, repo) = setup_repo();
    assert!(repo.load("../../x").is_err());
    assert!(repo.exists("short").is_err());
    assert!(repo.delete("IIIIII").is_err());
}

#[test]
fn test_list_ids_sorted_and_summaries_filtered() {
    let (_dir, repo) = setup_repo();
    let running = repo.add(&sample_game()).unwrap();

    let mut finished = sample_game();
    finished
        .service()
        .add_round([1, 2, 3, 4].into(), Feedback::perfect(4))
        .unwrap();
    let finished = repo.add(&finished).unwrap();

    let mut expected = vec![running.clone(), finished.clone()];
    expected.sort();
    assert_eq!(repo.list_ids().unwrap(), expected);

    let continuable = repo.summaries(true).unwrap();
    assert_eq!(continuable.len(), 1);
    assert_eq!(continuable[0].id(), &running);

    assert_eq!(repo.summaries(false).unwrap().len(), 2);
}

#[test]
fn test_corrupt_game_rejected_on_load() {
    let (_dir, repo) = setup_repo();
    let id = repo.add(&sample_game()).unwrap();
    let path = repo.games_dir().join(format!("{}.json", id));

    let tampered = std::fs::read_to_string(&path)
        .unwrap()
        .replace("\"attempts_allowed\": 10", "\"attempts_allowed\": 1");
    std::fs::write(&path, tampered).unwrap();

    assert!(repo.load(&id).is_err());
    assert!(repo.summaries(false).unwrap().is_empty());
}

#[test]
fn test_foreign_files_ignored() {
    let (_dir, repo) = setup_repo();
    std::fs::write(repo.games_dir().join("notes.txt"), "hello").unwrap();
    std::fs::write(repo.games_dir().join("bad-id.json"), "{}").unwrap();

    assert!(repo.list_ids().unwrap().is_empty());
}
