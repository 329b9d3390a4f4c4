/// Sections recognized in generated recipe markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Title,
    Ingredients,
    Instructions,
}

impl Section {
    const ALL: [Section; 3] = [Section::Title, Section::Ingredients, Section::Instructions];

    fn index(self) -> usize {
        match self {
            Section::Title => 0,
            Section::Ingredients => 1,
            Section::Instructions => 2,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Section::Title => "title",
            Section::Ingredients => "ingredients",
            Section::Instructions => "instructions",
        }
    }
}

/// Raw bodies of the first occurrence of each section, split into lines.
///
/// `None` means the heading never appeared. `Some(vec![])` means the heading
/// appeared but was immediately followed by another heading or end of input.
#[derive(Debug, Default)]
pub struct Sections {
    bodies: [Option<Vec<String>>; 3],
}

impl Sections {
    pub fn get(&self, section: Section) -> Option<&[String]> {
        self.bodies[section.index()].as_deref()
    }

    /// True when at least one recognized heading was seen.
    pub fn any(&self) -> bool {
        self.bodies.iter().any(Option::is_some)
    }
}

enum State {
    /// Before the first heading; lines are dropped.
    Preamble,
    /// Inside the first occurrence of a section.
    Collecting(Section),
    /// Inside a repeated heading; lines are dropped.
    Skipping,
}

/// Splits `text` into sections with a single pass over its lines.
pub fn scan(text: &str) -> Sections {
    let mut sections = Sections::default();
    let mut state = State::Preamble;

    for line in text.lines() {
        if let Some(section) = parse_heading(line) {
            let slot = &mut sections.bodies[section.index()];
            state = if slot.is_some() {
                State::Skipping
            } else {
                *slot = Some(Vec::new());
                State::Collecting(section)
            };
            continue;
        }

        if let State::Collecting(section) = state {
            if let Some(body) = sections.bodies[section.index()].as_mut() {
                body.push(line.to_string());
            }
        }
    }

    sections
}

/// Recognizes a heading line such as `## Ingredients` or `# title:`.
///
/// Matching is case-insensitive and the marker must be a run of one to six
/// `#` characters. Anything after the section name other than a single colon
/// and whitespace disqualifies the line.
pub fn parse_heading(line: &str) -> Option<Section> {
    let line = line.trim();
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }

    let rest = line[hashes..].trim_start();
    let rest = rest.strip_suffix(':').unwrap_or(rest).trim_end();

    Section::ALL
        .into_iter()
        .find(|section| rest.eq_ignore_ascii_case(section.name()))
}

/// Strips one leading list marker (`-` or `*`) from an ingredient line.
pub fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix('-')
        .or_else(|| line.strip_prefix('*'))
        .unwrap_or(line)
        .trim()
}
