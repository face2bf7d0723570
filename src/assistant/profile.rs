//! Static text about the site owner fed to the assistant.

use serde::{Deserialize, Serialize};

const DEFAULT_SKILLS: &str = "\
Clark's Skills:
- **Frontend:** HTML5, CSS3, JavaScript (ES6+), TypeScript, React, Next.js, Tailwind CSS, ShadCN UI
- **Backend:** Node.js, Express.js, Python, Django, REST APIs, GraphQL
- **Databases:** PostgreSQL, MongoDB, Firebase, SQL
- **Tools:** Git, GitHub, Docker, VS Code, Figma, Genkit";

const DEFAULT_ABOUT: &str = "\
About Clark:
- **Background:** Clark is a passionate Full Stack Developer with over 5 years of experience, specializing in both frontend and backend technologies. He has worked on a diverse range of projects from e-commerce platforms to complex enterprise applications. His approach combines technical expertise with a keen eye for design, ensuring applications are functional and deliver exceptional user experiences. He is dedicated to continuous learning to stay at the forefront of web development.
- **Core Values:** Quality-focused, Innovation-driven, User-centered, and a Continuous learner.
- **Education:**
  - Bachelor of Science in Information Technology from Zamboanga Peninsula Polytechnic State University (June 12, 2023) - Dean's Lister.
  - Information and Communication Technology from Ayala National High School (April 6, 2017) - With Honors.
- **Achievements:**
  - Technical Drafting NC III (2016)
  - 3D Animation NC II (2017)
  - Computer System Servicing NC II (2017)
  - Logo making contest winner (2016)
  - Certificate of Participation for Information Security Training (2021)
  - Certificate of Recognition for attending ICT camp as a Guest Speaker (2023)
- **Interests:** Reading technical books and manga, coffee, traveling, and motorcycle rides.";

const DEFAULT_CONTACT: &str = "\
**Contact Information:**
- **Email:** carreonclark72@gmail.com
- **Phone:** +63 9362536991
- **Address:** Zone 8, Ayala, Zamboanga City, Zamboanga Del Sur Philippines, 7000

**Availability:** Clark is currently available for freelance projects. Daily 09 am - 05 pm.

**Get in Touch:** To contact Clark, visitors should use the contact form on the website or the \"Hire Me\" button. When asked for a link or how to get in touch, provide a markdown link to '#contact'.";

/// Owner identity and hand-written context blocks.
///
/// Every field can be overridden from the `[profile]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Short name used in prose ("Clark").
    pub owner_name: String,
    /// Full name used in the assistant's introduction.
    pub full_name: String,
    /// Name the assistant answers to.
    pub assistant_name: String,
    /// Markdown link the assistant gives when asked how to get in touch.
    pub contact_link: String,
    pub skills: String,
    pub about: String,
    pub contact: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            owner_name: "Clark".to_string(),
            full_name: "Clark Heal Carreon".to_string(),
            assistant_name: "ClarkBot".to_string(),
            contact_link: "[You can reach him through the contact form](#contact)".to_string(),
            skills: DEFAULT_SKILLS.to_string(),
            about: DEFAULT_ABOUT.to_string(),
            contact: DEFAULT_CONTACT.to_string(),
        }
    }
}
