use super::domain::CommitteeRoster;

pub const CPD: &str = "Commission on Population and Development";
pub const UNSC: &str = "United Nations Security Council";
pub const WHO: &str = "World Health Organization";
pub const UNHRC: &str = "UN Human Rights Council";
pub const UNODC: &str = "UN Office on Drugs and Crime";
pub const UNEP: &str = "UN Environment Programme";
pub const WFP: &str = "World Food Programme";

/// Rosters published for the current session. Leadership rows carry no country.
pub fn default_rosters() -> Vec<CommitteeRoster> {
    vec![
        CommitteeRoster::new(CPD, "downloads/cpd-background-paper.pdf")
            .member("vmendozal@noordwijk.edu.mx", "Valeria Mendoza", None)
            .member("dherreras@noordwijk.edu.mx", "Diego Herrera", Some("India"))
            .member("rnavarrog@noordwijk.edu.mx", "Regina Navarro", Some("Nigeria"))
            .member("eibarrac@noordwijk.edu.mx", "Emilio Ibarra", Some("Japan")),
        CommitteeRoster::new(UNSC, "downloads/unsc-background-paper.pdf")
            .member("mun.chairs@noordwijk.edu.mx", "Sebastián Ortega", None)
            .member("cquirosm@noordwijk.edu.mx", "Camilo Quirós", Some("United States"))
            .member("ffuentesp@noordwijk.edu.mx", "Fernanda Fuentes", Some("France"))
            .member("jsalazarm@noordwijk.edu.mx", "Jimena Salazar", Some("Norway")),
        CommitteeRoster::new(WHO, "downloads/who-background-paper.pdf")
            .member("mun.chairs@noordwijk.edu.mx", "Lucía Peña", None)
            .member("achiuntib@noordwijk.edu.mx", "Ana Chiuntí", Some("Germany"))
            .member("npalaciosr@noordwijk.edu.mx", "Nicolás Palacios", Some("Kenya"))
            .member("testmail@noordwijk.edu.mx", "DEMO", Some("Canada")),
        CommitteeRoster::new(UNHRC, "downloads/unhrc-background-paper.pdf")
            .member("avillarrealt@noordwijk.edu.mx", "Andrea Villarreal", None)
            .member("mgarzaz@noordwijk.edu.mx", "Mateo Garza", Some("Ghana"))
            .member("isotov@noordwijk.edu.mx", "Isabella Soto", Some("Fiji")),
        CommitteeRoster::new(UNODC, "downloads/unodc-background-paper.pdf")
            .member("prenteriaa@noordwijk.edu.mx", "Pablo Rentería", None)
            .member("xcamposd@noordwijk.edu.mx", "Ximena Campos", Some("Colombia"))
            .member("lbenitezo@noordwijk.edu.mx", "Leonardo Benítez", Some("Singapore")),
        CommitteeRoster::new(UNEP, "downloads/unep-background-paper.pdf")
            .member("rmoralesv@noordwijk.edu.mx", "Renata Morales", None)
            .member("sdominguezh@noordwijk.edu.mx", "Santiago Domínguez", Some("Brazil"))
            .member("cquirosm@noordwijk.edu.mx", "Camilo Quirós", Some("Morocco")),
        CommitteeRoster::new(WFP, "downloads/wfp-background-paper.pdf")
            .member("acruza@noordwijk.edu.mx", "Arantza Cruz", None)
            .member("tlunaq@noordwijk.edu.mx", "Tomás Luna", Some("Ethiopia")),
    ]
}
