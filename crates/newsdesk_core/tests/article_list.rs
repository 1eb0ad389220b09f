use newsdesk_core::{Article, ArticleList, ListError};

fn article(title: &str) -> Article {
    Article::new(title, format!("{title} body"), "News", "1-Jan-17", "True")
}

fn list_of(titles: &[&str]) -> ArticleList {
    titles.iter().map(|title| article(title)).collect()
}

fn titles(list: &ArticleList) -> Vec<String> {
    list.iter().map(|a| a.title.clone()).collect()
}

#[test]
fn push_back_appends_in_order() {
    let mut list = ArticleList::new();
    assert!(list.is_empty());

    list.push_back(article("a"));
    list.push_back(article("b"));

    assert_eq!(list.len(), 2);
    assert_eq!(titles(&list), ["a", "b"]);
    assert_eq!(list.front().unwrap().title, "a");
    assert_eq!(list.back().unwrap().title, "b");
}

#[test]
fn insert_at_head_middle_and_end() {
    let mut list = list_of(&["b", "d"]);

    list.insert(0, article("a")).unwrap();
    list.insert(2, article("c")).unwrap();
    list.insert(4, article("e")).unwrap();

    assert_eq!(titles(&list), ["a", "b", "c", "d", "e"]);
    assert_eq!(list.back().unwrap().title, "e");
}

#[test]
fn insert_into_empty_list_sets_head_and_tail() {
    let mut list = ArticleList::new();
    list.insert(0, article("only")).unwrap();

    assert_eq!(list.front().unwrap().title, "only");
    assert_eq!(list.back().unwrap().title, "only");
}

#[test]
fn insert_past_end_is_rejected() {
    let mut list = list_of(&["a"]);
    let err = list.insert(2, article("x")).unwrap_err();

    assert_eq!(err, ListError::IndexOutOfRange { index: 2, len: 1 });
    assert_eq!(list.len(), 1);
}

#[test]
fn erase_last_updates_tail() {
    let mut list = list_of(&["a", "b", "c"]);

    let removed = list.erase(2).unwrap();
    assert_eq!(removed.title, "c");
    assert_eq!(list.back().unwrap().title, "b");

    list.push_back(article("d"));
    assert_eq!(titles(&list), ["a", "b", "d"]);
}

#[test]
fn erase_middle_and_head() {
    let mut list = list_of(&["a", "b", "c"]);

    assert_eq!(list.erase(1).unwrap().title, "b");
    assert_eq!(list.erase(0).unwrap().title, "a");
    assert_eq!(titles(&list), ["c"]);
    assert_eq!(list.len(), 1);
}

#[test]
fn erase_out_of_range_is_rejected() {
    let mut list = list_of(&["a"]);
    let err = list.erase(1).unwrap_err();
    assert_eq!(err, ListError::IndexOutOfRange { index: 1, len: 1 });
}

#[test]
fn pop_front_until_empty() {
    let mut list = list_of(&["a", "b"]);

    assert_eq!(list.pop_front().unwrap().title, "a");
    assert_eq!(list.pop_front().unwrap().title, "b");
    assert_eq!(list.pop_front().unwrap_err(), ListError::Empty);
    assert!(list.front().is_none());
    assert!(list.back().is_none());

    list.push_back(article("again"));
    assert_eq!(titles(&list), ["again"]);
}

#[test]
fn get_and_contains() {
    let list = list_of(&["a", "b", "c"]);

    assert_eq!(list.get(1).unwrap().title, "b");
    assert_eq!(
        list.get(3).unwrap_err(),
        ListError::IndexOutOfRange { index: 3, len: 3 }
    );
    assert!(list.contains_title("c"));
    assert!(!list.contains_title("z"));
    assert!(list.contains(|a| a.content == "a body"));
}

#[test]
fn clear_is_idempotent() {
    let mut list = list_of(&["a", "b"]);

    list.clear();
    assert_eq!(list.len(), 0);
    assert_eq!(list.iter().count(), 0);

    list.clear();
    assert!(list.is_empty());
}

#[test]
fn iteration_restarts_from_head() {
    let list = list_of(&["a", "b"]);

    let mut first = list.iter();
    assert_eq!(first.next().unwrap().title, "a");

    let again: Vec<&str> = list.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(again, ["a", "b"]);

    let mut for_loop = Vec::new();
    for article in &list {
        for_loop.push(article.title.clone());
    }
    assert_eq!(for_loop, ["a", "b"]);
}

#[test]
fn debug_lists_articles() {
    let list = list_of(&["a"]);
    let rendered = format!("{list:?}");
    assert!(rendered.starts_with('['));
    assert!(rendered.contains("title: \"a\""));
}
