/// Backend routes the editor talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    AddNode,
    AddLink,
    AddGroup,
    StartCapture,
    StopCapture,
    Topology,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AddNode => "/add_node",
            Endpoint::AddLink => "/add_link",
            Endpoint::AddGroup => "/add_group",
            Endpoint::StartCapture => "/start_capture",
            Endpoint::StopCapture => "/stop_capture",
            Endpoint::Topology => "/topology",
        }
    }

    /// Phrase used in user-facing alerts: "Error while <action>: ...".
    pub fn action(&self) -> &'static str {
        match self {
            Endpoint::AddNode => "adding node",
            Endpoint::AddLink => "adding link",
            Endpoint::AddGroup => "adding group",
            Endpoint::StartCapture => "starting packet capture",
            Endpoint::StopCapture => "stopping packet capture",
            Endpoint::Topology => "loading topology",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
