use crate::client::{ApiConfig, FilloutApiClient};
use crate::errors::Result;
use fillout_core::{
    CreateSubmissionsResponse, Form, FormSummary, GetSubmissionOptions, ListSubmissionsOptions,
    Region, Submission, SubmissionPage, SubmissionResponse, Webhook,
};
use log::{debug, info};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateWebhookBody<'a> {
    form_id: &'a str,
    url: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteWebhookBody {
    webhook_id: u64,
}

#[derive(Serialize)]
struct CreateSubmissionsBody<'a> {
    submissions: &'a [Map<String, Value>],
}

/// Main SDK struct for Fillout
///
/// ```no_run
/// # async fn run() -> fillout_api::Result<()> {
/// use fillout_api::{Fillout, ListSubmissionsOptions, Region};
///
/// let fillout = Fillout::new("sk_prod_...", Some(Region::Eu))?;
/// let page = fillout
///     .get_submissions("foAdHjd1Duus", &ListSubmissionsOptions::new().limit(10))
///     .await?;
/// println!("{} submissions", page.total_responses);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Fillout {
    api_client: FilloutApiClient,
}

impl Fillout {
    /// Create new Fillout instance with an API key and optional region.
    ///
    /// Fails with a configuration error when the key does not start with a
    /// recognized prefix. No request is made.
    pub fn new(api_key: impl Into<String>, region: Option<Region>) -> Result<Self> {
        let api_client = FilloutApiClient::new(api_key, region)?;
        Ok(Self { api_client })
    }

    /// Create against a custom host, e.g. a proxy or a local test server
    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Result<Self> {
        let api_client = FilloutApiClient::with_base_url(api_key, base_url)?;
        Ok(Self { api_client })
    }

    pub fn from_config<C: ApiConfig>(config: &C) -> std::result::Result<Self, C::Error> {
        let api_client = FilloutApiClient::from_config(config)?;
        Ok(Self { api_client })
    }

    /// Wrap an already configured API client
    pub fn from_client(api_client: FilloutApiClient) -> Self {
        Self { api_client }
    }

    /// Use a caller-configured reqwest client (timeouts, proxies, TLS)
    pub fn with_http_client(self, client: reqwest::Client) -> Self {
        Self {
            api_client: self.api_client.with_http_client(client),
        }
    }

    pub fn api_client(&self) -> &FilloutApiClient {
        &self.api_client
    }

    /// Get all the forms in your organization
    pub async fn get_forms(&self) -> Result<Vec<FormSummary>> {
        debug!("Fetching forms");
        let url = self.api_client.url(&["v1", "api", "forms"], None)?;
        let response = self.api_client.get(url, "fetch Fillout forms").await?;
        let forms: Vec<FormSummary> = self.api_client.json(response).await?;

        info!("Successfully fetched {} forms", forms.len());

        Ok(forms)
    }

    /// Get the metadata of a form
    ///
    /// `form_id` is the id found in the URL of a form, e.g. `foAdHjd1Duus`.
    pub async fn get_form(&self, form_id: &str) -> Result<Form> {
        debug!("Fetching form {}", form_id);
        let url = self
            .api_client
            .url(&["v1", "api", "forms", form_id], None)?;
        let action = format!("fetch Fillout form '{}'", form_id);
        let response = self.api_client.get(url, &action).await?;
        let form: Form = self.api_client.json(response).await?;

        info!(
            "Successfully fetched form {} with {} questions",
            form_id,
            form.questions.len()
        );

        Ok(form)
    }

    /// Get one page of form submissions
    pub async fn get_submissions(
        &self,
        form_id: &str,
        options: &ListSubmissionsOptions,
    ) -> Result<SubmissionPage> {
        debug!("Fetching submissions for form {}", form_id);
        let query = options.to_query();
        let url = self
            .api_client
            .url(&["v1", "api", "forms", form_id, "submissions"], Some(&query))?;
        let action = format!("fetch submissions for Fillout form '{}'", form_id);
        let response = self.api_client.get(url, &action).await?;
        let page: SubmissionPage = self.api_client.json(response).await?;

        info!(
            "Successfully fetched {} of {} submissions",
            page.responses.len(),
            page.total_responses
        );

        Ok(page)
    }

    /// Get a form submission by id
    pub async fn get_submission(
        &self,
        form_id: &str,
        submission_id: &str,
        options: &GetSubmissionOptions,
    ) -> Result<Submission> {
        debug!("Fetching submission {} of form {}", submission_id, form_id);
        let query = options.to_query();
        let url = self.api_client.url(
            &["v1", "api", "forms", form_id, "submissions", submission_id],
            Some(&query),
        )?;
        let action = format!("fetch Fillout submission '{}'", submission_id);
        let response = self.api_client.get(url, &action).await?;
        let body: SubmissionResponse = self.api_client.json(response).await?;

        info!("Successfully fetched submission {}", submission_id);

        Ok(body.submission)
    }

    /// Delete a form submission by id
    pub async fn delete_submission(&self, form_id: &str, submission_id: &str) -> Result<()> {
        debug!("Deleting submission {} of form {}", submission_id, form_id);
        let url = self.api_client.url(
            &["v1", "api", "forms", form_id, "submissions", submission_id],
            None,
        )?;
        let action = format!("delete Fillout submission '{}'", submission_id);
        self.api_client.delete(url, &action).await?;

        info!("Successfully deleted submission {}", submission_id);

        Ok(())
    }

    /// Create a webhook for form submissions
    ///
    /// `url` is the endpoint that will receive new submissions.
    pub async fn create_webhook(&self, form_id: &str, url: &str) -> Result<Webhook> {
        debug!("Creating webhook for form {} -> {}", form_id, url);
        let endpoint = self
            .api_client
            .url(&["v1", "api", "webhook", "create"], None)?;
        let body = CreateWebhookBody { form_id, url };
        let response = self
            .api_client
            .post(endpoint, &body, "create Fillout webhook")
            .await?;
        let webhook: Webhook = self.api_client.json(response).await?;

        info!("Successfully created webhook {}", webhook.id);

        Ok(webhook)
    }

    /// Remove a webhook by the numeric id received when creating it
    pub async fn delete_webhook(&self, webhook_id: u64) -> Result<()> {
        debug!("Deleting webhook {}", webhook_id);
        let endpoint = self
            .api_client
            .url(&["v1", "api", "webhook", "delete"], None)?;
        let body = DeleteWebhookBody { webhook_id };
        let action = format!("delete Fillout webhook {}", webhook_id);
        self.api_client.post(endpoint, &body, &action).await?;

        info!("Successfully deleted webhook {}", webhook_id);

        Ok(())
    }

    /// Create submissions for a form. Each record is a JSON object shaped
    /// like a submission (`questions`, `urlParameters`, ...).
    ///
    /// The service accepts at most 10 submissions per request; larger
    /// batches are sent as-is and rejected server-side.
    pub async fn create_submissions(
        &self,
        form_id: &str,
        submissions: &[Map<String, Value>],
    ) -> Result<CreateSubmissionsResponse> {
        debug!(
            "Creating {} submissions for form {}",
            submissions.len(),
            form_id
        );
        let url = self
            .api_client
            .url(&["v1", "api", "forms", form_id, "submissions"], None)?;
        let body = CreateSubmissionsBody { submissions };
        let response = self
            .api_client
            .post(url, &body, "create Fillout submissions")
            .await?;
        let created: CreateSubmissionsResponse = self.api_client.json(response).await?;

        info!("Successfully created submissions for form {}", form_id);

        Ok(created)
    }
}
