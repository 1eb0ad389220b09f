use newsdesk_core::{
    count_labels, political_fake_by_month, political_fake_percentage, render_month_histogram,
    search_articles, top_words, Article, ArticleList, DeskError, DeskService, KeywordQuery,
    LabelCounts, SortConfig, SortError,
};

fn sample() -> ArticleList {
    [
        Article::new("p1", "Tax plan vote", "politics", "January 10, 2016", "Fake"),
        Article::new("p2", "Tax debate", "politicsNews", "12-Jan-16", "True"),
        Article::new("p3", "Rally held", "politics News", "3-Feb-16", " fake "),
        Article::new("p4", "Old story", "politics", "3-Feb-15", "Fake"),
        Article::new("p5", "Broken date", "politics", "sometime", "Fake"),
        Article::new("g1", "The agency, the agency!", "Government News", "5-Mar-17", "Fake"),
        Article::new("g2", "Agency budget the", "government", "6-Mar-17", "FAKE"),
        Article::new("g3", "Real agency news", "Government News", "7-Mar-17", "True"),
        Article::new("w1", "Storm warning", "worldnews", "8-Mar-17", "unknown"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn count_labels_ignores_case_and_unknown_values() {
    assert_eq!(
        count_labels(&sample()),
        LabelCounts {
            true_count: 2,
            fake_count: 6,
        }
    );
}

#[test]
fn political_percentage_for_year() {
    let list = sample();

    let percent = political_fake_percentage(&list, 2016);
    assert!((percent - 200.0 / 3.0).abs() < 1e-9, "got {percent}");
    assert_eq!(political_fake_percentage(&list, 2015), 100.0);
    assert_eq!(political_fake_percentage(&list, 2020), 0.0);
}

#[test]
fn monthly_breakdown_counts_and_skips_bad_dates() {
    let breakdown = political_fake_by_month(&sample(), 2016);

    assert_eq!(breakdown.months.len(), 12);
    assert_eq!(breakdown.months[0].total, 2);
    assert_eq!(breakdown.months[0].fake, 1);
    assert_eq!(breakdown.months[1].total, 1);
    assert_eq!(breakdown.months[1].fake, 1);
    assert_eq!(breakdown.months[2].total, 0);
    assert_eq!(breakdown.skipped, 1);

    let rendered = render_month_histogram(&breakdown);
    assert!(rendered.starts_with(&format!("JAN | {} 50%\n", "*".repeat(50))));
    assert!(rendered.contains(&format!("FEB | {} 100%\n", "*".repeat(100))));
}

#[test]
fn top_words_filters_by_category_and_label() {
    let words = top_words(&sample(), "government", "fake", 2);

    assert_eq!(words.len(), 2);
    assert_eq!(words[0].word, "the");
    assert_eq!(words[0].count, 3);
    assert_eq!(words[1].word, "agency");
    assert_eq!(words[1].count, 3);
}

#[test]
fn search_combines_filters_and_limit() {
    let list = sample();

    let hits = search_articles(&list, &KeywordQuery::keyword("TAX"));
    let titles: Vec<&str> = hits.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["p1", "p2"]);

    let hits = search_articles(
        &list,
        &KeywordQuery::keyword("agency").with_category("government news"),
    );
    let titles: Vec<&str> = hits.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["g1", "g3"]);

    let hits = search_articles(&list, &KeywordQuery::default().with_year("16"));
    assert_eq!(hits.len(), 3);

    let hits = search_articles(&list, &KeywordQuery::default().with_limit(10));
    assert_eq!(hits.len(), list.len());

    assert!(search_articles(&list, &KeywordQuery::keyword("volcano")).is_empty());
}

#[test]
fn desk_service_runs_import_sort_report() {
    let input = "Title,Content,Category,Date,Label\n\
                 late,Late news,politics,5-May-17,Fake\n\
                 early,Early news,politics,\"May 5, 2016\",True\n";
    let mut desk = DeskService::new(SortConfig::default()).unwrap();

    assert_eq!(desk.import_reader(input.as_bytes()).unwrap().imported, 2);
    let stats = desk.sort_by_date().unwrap();
    assert_eq!(stats.nodes, 2);

    let titles: Vec<&str> = desk.articles().iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["early", "late"]);
    assert_eq!(desk.label_counts().fake_count, 1);
    assert_eq!(desk.political_fake_percentage(2017), 100.0);

    let mut output = Vec::new();
    desk.export_sorted(&mut output).unwrap();
    assert!(String::from_utf8(output)
        .unwrap()
        .starts_with("Date,Title,Content,Category,Label\nMay 5, 2016,\"early\""));
}

#[test]
fn desk_service_surfaces_sort_rejection() {
    let mut desk = DeskService::new(SortConfig { run_size: 4 }).unwrap();
    desk.push_article(Article::new("a", "x", "news", "1-Jan-17", "True"));
    desk.push_article(Article::new("b", "x", "news", "2016/01/15", "True"));

    let err = desk.sort_by_date().unwrap_err();

    assert!(matches!(
        err,
        DeskError::Sort(SortError::DateParse { position: 1, .. })
    ));
    assert_eq!(desk.articles().get(0).unwrap().title, "a");
}

#[test]
fn desk_service_rejects_zero_run_size() {
    assert!(matches!(
        DeskService::new(SortConfig { run_size: 0 }),
        Err(SortError::InvalidRunSize(0))
    ));
}

#[test]
fn report_types_serialize_for_json_output() {
    let counts = count_labels(&sample());
    let json = serde_json::to_value(counts).unwrap();
    assert_eq!(json, serde_json::json!({ "true_count": 2, "fake_count": 6 }));

    let config: SortConfig = serde_json::from_str(r#"{ "run_size": 8 }"#).unwrap();
    assert_eq!(config.run_size, 8);

    let article = Article::new("t", "c", "news", "1-Jan-17", "True");
    let decoded: Article =
        serde_json::from_value(serde_json::to_value(&article).unwrap()).unwrap();
    assert_eq!(decoded, article);
}
