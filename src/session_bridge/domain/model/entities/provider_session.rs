#[derive(Clone, Debug)]
pub struct ProviderSession {
    pub subject_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub id_token: String,
}
