use quicklist_domain::{TodoItem, TodoList};
use quicklist_persistence::{FileStore, KeyValueStore, ListStore, TODOS_KEY};
use tempfile::tempdir;

async fn save_then_load(list: &TodoList) -> TodoList {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.set(TODOS_KEY, &list.to_json().unwrap()).await.unwrap();

    let loaded = ListStore::load(FileStore::new(dir.path())).await.unwrap();
    loaded.list().clone()
}

#[tokio::test]
async fn test_round_trip_empty_list() {
    let list = TodoList::new();
    assert_eq!(save_then_load(&list).await, list);
}

#[tokio::test]
async fn test_round_trip_single_item_no_title() {
    let mut list = TodoList::new();
    list.items.push(TodoItem::new(1700000000000, "Buy milk"));
    assert_eq!(save_then_load(&list).await, list);
}

#[tokio::test]
async fn test_round_trip_many_items() {
    let mut list = TodoList::with_title("Weekend");
    for i in 0..25u64 {
        let mut item = TodoItem::new(1700000000000 + i, format!("Task {}", i));
        item.completed = i % 3 == 0;
        list.items.push(item);
    }
    assert_eq!(save_then_load(&list).await, list);
}

#[tokio::test]
async fn test_mutations_survive_restart() {
    let dir = tempdir().unwrap();

    {
        let mut list_store = ListStore::load(FileStore::new(dir.path())).await.unwrap();
        list_store.set_title("Chores").await.unwrap();
        let dishes = list_store.add("Dishes").await.unwrap().unwrap();
        list_store.add("Vacuum").await.unwrap();
        list_store.toggle(dishes.id).await.unwrap();
    }

    let list_store = ListStore::load(FileStore::new(dir.path())).await.unwrap();
    assert_eq!(list_store.title(), "Chores");
    assert_eq!(list_store.items().len(), 2);
    assert!(list_store.items()[0].completed);
    assert!(!list_store.items()[1].completed);
}

#[tokio::test]
async fn test_clear_deletes_file() {
    let dir = tempdir().unwrap();
    let mut list_store = ListStore::load(FileStore::new(dir.path())).await.unwrap();
    list_store.add("Something").await.unwrap();
    assert!(dir.path().join("todos.json").exists());

    list_store.clear().await.unwrap();
    assert!(!dir.path().join("todos.json").exists());

    let reloaded = ListStore::load(FileStore::new(dir.path())).await.unwrap();
    assert!(reloaded.list().is_empty());
}

#[tokio::test]
async fn test_corrupt_file_falls_back_to_empty() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("todos.json"), "definitely not json").unwrap();

    let list_store = ListStore::load(FileStore::new(dir.path())).await.unwrap();
    assert!(list_store.list().is_empty());
}

#[tokio::test]
async fn test_legacy_payload_without_title() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("todos.json"),
        r#"{"items":[{"id":1,"text":"Old","completed":true}]}"#,
    )
    .unwrap();

    let list_store = ListStore::load(FileStore::new(dir.path())).await.unwrap();
    assert_eq!(list_store.title(), "");
    assert_eq!(list_store.items()[0].text, "Old");
}
