use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show the public landing page
    Landing,

    /// Show the login page with the demo account hints
    Login,

    /// Sign in and show the session, layout and dashboard
    SignIn {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Show the navigation menu a role sees
    Menu {
        /// administrador, administrador_medico or medico
        #[arg(long)]
        role: String,
    },

    /// List every staff account (administrators only)
    Users {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}
