#[derive(clap::Parser)]
pub(crate) struct Action {
    /// Pretty prints the openapi definition.
    #[clap(short, long)]
    pub pretty: bool,
}

impl Action {
    pub(crate) fn execute(&self) -> Result<(), super::Error> {
        let api = template_registry::openapi();
        let output = if self.pretty {
            api.to_pretty_json()?
        } else {
            api.to_json()?
        };
        println!("{output}");
        Ok(())
    }
}
