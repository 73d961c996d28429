// Data models shared by the discovery engine, session storage and prompt builder

mod discovery;

pub use discovery::{
    AnsweredQuestion, DetectedDetails, DiscoveryQuestion, EntropyLevel, InputDiagnosis,
    InputSignals, KnownInputs, QuestionId,
};
