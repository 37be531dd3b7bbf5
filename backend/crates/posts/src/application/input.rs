//! Post Input Validation
//!
//! Create requires both fields. Update treats each field as "sometimes":
//! absent means untouched, present means the create rules apply.

use kernel::validation::{FieldErrors, TextInput, messages};

use crate::domain::entity::post::PostChanges;
use crate::domain::value_object::{
    post_content::PostContent,
    post_title::{POST_TITLE_MAX_LENGTH, PostTitle, PostTitleError},
};

/// Create input as received
#[derive(Debug, Clone, Default)]
pub struct NewPostInput {
    pub title: Option<TextInput>,
    pub content: Option<TextInput>,
}

/// Update input as received
///
/// Outer `None`: field absent. `Some(None)`: field present but `null`.
#[derive(Debug, Clone, Default)]
pub struct PostPatchInput {
    pub title: Option<Option<TextInput>>,
    pub content: Option<Option<TextInput>>,
}

/// Validated create input
#[derive(Debug, Clone)]
pub struct ValidNewPost {
    pub title: PostTitle,
    pub content: PostContent,
}

fn check_title(raw: Option<&TextInput>, errors: &mut FieldErrors) -> Option<PostTitle> {
    let raw = TextInput::check(raw, "title", errors)?;
    match raw.map(PostTitle::new) {
        None | Some(Err(PostTitleError::Empty)) => {
            errors.add("title", messages::required("title"));
            None
        }
        Some(Err(PostTitleError::TooLong { .. })) => {
            errors.add("title", messages::max_chars("title", POST_TITLE_MAX_LENGTH));
            None
        }
        Some(Ok(title)) => Some(title),
    }
}

fn check_content(raw: Option<&TextInput>, errors: &mut FieldErrors) -> Option<PostContent> {
    let raw = TextInput::check(raw, "content", errors)?;
    match raw.map(PostContent::new) {
        Some(Ok(content)) => Some(content),
        _ => {
            errors.add("content", messages::required("content"));
            None
        }
    }
}

/// Validate both fields of a new post
pub fn validate_new_post(input: &NewPostInput) -> Result<ValidNewPost, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = check_title(input.title.as_ref(), &mut errors);
    let content = check_content(input.content.as_ref(), &mut errors);

    match (title, content) {
        (Some(title), Some(content)) => Ok(ValidNewPost { title, content }),
        _ => Err(errors),
    }
}

/// Validate the fields present in a partial update
pub fn validate_post_changes(input: &PostPatchInput) -> Result<PostChanges, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = input
        .title
        .as_ref()
        .map(|raw| check_title(raw.as_ref(), &mut errors));
    let content = input
        .content
        .as_ref()
        .map(|raw| check_content(raw.as_ref(), &mut errors));

    errors.into_result()?;

    Ok(PostChanges {
        title: title.flatten(),
        content: content.flatten(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_both() {
        let errors = validate_new_post(&NewPostInput::default()).unwrap_err();
        assert_eq!(
            errors.get("title"),
            Some(&["The title field is required.".to_string()][..])
        );
        assert_eq!(
            errors.get("content"),
            Some(&["The content field is required.".to_string()][..])
        );
    }

    #[test]
    fn test_create_title_too_long() {
        let input = NewPostInput {
            title: Some("t".repeat(256).into()),
            content: Some("body".into()),
        };
        let errors = validate_new_post(&input).unwrap_err();
        assert_eq!(
            errors.get("title"),
            Some(&["The title field must not be greater than 255 characters.".to_string()][..])
        );
        assert!(!errors.has("content"));
    }

    #[test]
    fn test_patch_absent_fields_untouched() {
        let changes = validate_post_changes(&PostPatchInput::default()).unwrap();
        assert_eq!(changes, PostChanges::default());
    }

    #[test]
    fn test_patch_present_fields_follow_create_rules() {
        let input = PostPatchInput {
            title: Some(Some("".into())),
            content: Some(None),
        };
        let errors = validate_post_changes(&input).unwrap_err();
        assert!(errors.has("title"));
        assert!(errors.has("content"));
    }

    #[test]
    fn test_patch_single_field() {
        let input = PostPatchInput {
            title: None,
            content: Some(Some("new body".into())),
        };
        let changes = validate_post_changes(&input).unwrap();
        assert!(changes.title.is_none());
        assert_eq!(changes.content.unwrap().as_str(), "new body");
    }

    #[test]
    fn test_non_string_members_reported_with_the_rest() {
        let input = NewPostInput {
            title: Some(TextInput::NotText),
            content: Some("".into()),
        };
        let errors = validate_new_post(&input).unwrap_err();
        assert_eq!(
            errors.get("title"),
            Some(&["The title field must be a string.".to_string()][..])
        );
        assert_eq!(
            errors.get("content"),
            Some(&["The content field is required.".to_string()][..])
        );
    }

    #[test]
    fn test_patch_non_string_member() {
        let input = PostPatchInput {
            title: None,
            content: Some(Some(TextInput::NotText)),
        };
        let errors = validate_post_changes(&input).unwrap_err();
        assert_eq!(
            errors.get("content"),
            Some(&["The content field must be a string.".to_string()][..])
        );
        assert!(!errors.has("title"));
    }
}
