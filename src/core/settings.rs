use crate::core::client::Client;
use crate::domain::settings::AccountSettings;
use crate::utils::error::Result;

pub const ME_ENDPOINT: &str = "me";

#[derive(Debug, Clone)]
pub struct SettingsHandler<'a> {
    client: &'a Client,
}

impl<'a> SettingsHandler<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Settings of the shop the client authenticates as.
    pub async fn get_account_settings(&self) -> Result<AccountSettings> {
        self.client.get(ME_ENDPOINT).await
    }
}
