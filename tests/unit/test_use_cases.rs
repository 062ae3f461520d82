use async_trait::async_trait;
use mockall::mock;
use screams_api::{
    application::{screams::use_case::ScreamsUseCase, social::use_case::SocialUseCase},
    domain::{
        scream::{entity::Scream, errors::DomainError, repository::ScreamRepository},
        social::{comment::Comment, repository::SocialRepository},
    },
};
use std::sync::Arc;
use uuid::Uuid;

mock! {
    pub ScreamRepo {}

    #[async_trait]
    impl ScreamRepository for ScreamRepo {
        async fn insert(&self, scream: &Scream) -> Result<Scream, DomainError>;
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Scream>, DomainError>;
        async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Scream>, DomainError>;
        async fn delete_cascade(&self, id: Uuid) -> Result<(), DomainError>;
    }
}

mock! {
    pub SocialRepo {}

    #[async_trait]
    impl SocialRepository for SocialRepo {
        async fn add_comment(&self, comment: &Comment) -> Result<Comment, DomainError>;
        async fn find_comments(&self, scream_id: Uuid) -> Result<Vec<Comment>, DomainError>;
        async fn like(&self, scream_id: Uuid, user_handle: &str) -> Result<Scream, DomainError>;
        async fn unlike(&self, scream_id: Uuid, user_handle: &str) -> Result<Scream, DomainError>;
    }
}

fn screams_use_case(screams: MockScreamRepo, social: MockSocialRepo) -> ScreamsUseCase {
    ScreamsUseCase::new(Arc::new(screams), Arc::new(social))
}

#[tokio::test]
async fn create_rejects_blank_body_without_touching_store() {
    // No expectations set: any repository call panics the test.
    let use_case = screams_use_case(MockScreamRepo::new(), MockSocialRepo::new());

    let result = use_case
        .create("   ".to_string(), "alice", "https://img.test/a.png")
        .await;
    assert!(matches!(result, Err(DomainError::ValidationError(_))));
}

#[tokio::test]
async fn create_persists_scream_with_author_identity() {
    let mut screams = MockScreamRepo::new();
    screams
        .expect_insert()
        .times(1)
        .returning(|scream| Ok(scream.clone()));
    let use_case = screams_use_case(screams, MockSocialRepo::new());

    let created = use_case
        .create("hello".to_string(), "alice", "https://img.test/a.png")
        .await
        .expect("create should succeed");
    assert_eq!(created.body, "hello");
    assert_eq!(created.user_handle, "alice");
    assert_eq!(created.like_count, 0);
    assert_eq!(created.comment_count, 0);
}

#[tokio::test]
async fn delete_by_non_owner_is_forbidden_and_never_deletes() {
    let scream = Scream::new(
        "mine".to_string(),
        "alice".to_string(),
        "https://img.test/a.png".to_string(),
    );
    let id = scream.id;

    let mut screams = MockScreamRepo::new();
    screams
        .expect_find_by_id()
        .times(1)
        .returning(move |_| Ok(Some(scream.clone())));
    // No expect_delete_cascade: a call would panic.
    let use_case = screams_use_case(screams, MockSocialRepo::new());

    let result = use_case.delete(id, "bob").await;
    assert!(matches!(result, Err(DomainError::Forbidden(_))));
}

#[tokio::test]
async fn delete_of_missing_scream_is_not_found() {
    let mut screams = MockScreamRepo::new();
    screams.expect_find_by_id().times(1).returning(|_| Ok(None));
    let use_case = screams_use_case(screams, MockSocialRepo::new());

    let result = use_case.delete(Uuid::now_v7(), "alice").await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn delete_by_owner_cascades() {
    let scream = Scream::new(
        "mine".to_string(),
        "alice".to_string(),
        "https://img.test/a.png".to_string(),
    );
    let id = scream.id;

    let mut screams = MockScreamRepo::new();
    screams
        .expect_find_by_id()
        .times(1)
        .returning(move |_| Ok(Some(scream.clone())));
    screams
        .expect_delete_cascade()
        .times(1)
        .returning(|_| Ok(()));
    let use_case = screams_use_case(screams, MockSocialRepo::new());

    assert!(use_case.delete(id, "alice").await.is_ok());
}

#[tokio::test]
async fn add_comment_rejects_blank_body_without_touching_store() {
    let use_case = SocialUseCase::new(Arc::new(MockSocialRepo::new()));

    let result = use_case
        .add_comment(Uuid::now_v7(), "  ".to_string(), "bob", "https://img.test/b.png")
        .await;
    assert!(matches!(result, Err(DomainError::ValidationError(_))));
}

#[tokio::test]
async fn add_comment_carries_author_and_scream_reference() {
    let scream_id = Uuid::now_v7();

    let mut social = MockSocialRepo::new();
    social
        .expect_add_comment()
        .times(1)
        .returning(|comment| Ok(comment.clone()));
    let use_case = SocialUseCase::new(Arc::new(social));

    let comment = use_case
        .add_comment(scream_id, "nice".to_string(), "bob", "https://img.test/b.png")
        .await
        .expect("comment should succeed");
    assert_eq!(comment.scream_id, scream_id);
    assert_eq!(comment.body, "nice");
    assert_eq!(comment.user_handle, "bob");
}

#[tokio::test]
async fn like_errors_pass_through_unchanged() {
    let mut social = MockSocialRepo::new();
    social
        .expect_like()
        .times(1)
        .returning(|_, _| Err(DomainError::AlreadyLiked));
    social
        .expect_unlike()
        .times(1)
        .returning(|_, _| Err(DomainError::NotLiked));
    let use_case = SocialUseCase::new(Arc::new(social));

    assert!(matches!(
        use_case.like(Uuid::now_v7(), "bob").await,
        Err(DomainError::AlreadyLiked)
    ));
    assert!(matches!(
        use_case.unlike(Uuid::now_v7(), "bob").await,
        Err(DomainError::NotLiked)
    ));
}
