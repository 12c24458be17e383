use crate::config::aws_client_config::AwsClientConfig;
use crate::config::ConfigLoader;
use rusoto_core::credential::EnvironmentProvider;
use rusoto_stepfunctions::StepFunctionsClient;

pub fn get_step_functions_client() -> StepFunctionsClient {
    let config = ConfigLoader::load_default::<AwsClientConfig>();
    let request_dispatcher = rusoto_core::request::HttpClient::new()
        .unwrap_or_else(|e| panic!("Unable to build Rusoto HTTP Client: {e}"));

    StepFunctionsClient::new_with(
        request_dispatcher,
        EnvironmentProvider::default(),
        config.region(),
    )
}
