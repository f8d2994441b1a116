use std::fmt;

/// One stage of the signup wizard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    Intro,
    University,
    Email,
    Name,
    Password,
    Verification,
}

impl Step {
    /// Every step, in the order the wizard walks them
    pub const ALL: [Step; 6] = [
        Step::Intro,
        Step::University,
        Step::Email,
        Step::Name,
        Step::Password,
        Step::Verification,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const FIRST: Step = Step::Intro;

    pub const LAST: Step = Step::Verification;

    /// 0-based index into `Step::ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    /// 1-based position for "step n of m" labels
    pub fn position(self) -> usize {
        self.index() + 1
    }

    /// The next step, or `self` at the last step
    pub fn advance(self) -> Step {
        Self::ALL.get(self.index() + 1).copied().unwrap_or(self)
    }

    /// The previous step, or `self` at the first step
    pub fn retreat(self) -> Step {
        match self.index() {
            0 => self,
            idx => Self::ALL[idx - 1],
        }
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Step::Intro => "intro",
            Step::University => "university",
            Step::Email => "email",
            Step::Name => "name",
            Step::Password => "password",
            Step::Verification => "verification",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
