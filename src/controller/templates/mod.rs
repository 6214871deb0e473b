pub(super) mod create;
pub(super) mod delete;
pub(super) mod get;
pub(super) mod list;

#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub(crate) struct Acknowledgment {
    #[schema(example = "success")]
    pub status: &'static str,
}

impl Acknowledgment {
    pub(crate) const fn success() -> Self {
        Self { status: "success" }
    }
}
