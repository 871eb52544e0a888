//! Form models exchanged with the renderer.
//!
//! A form model is what the create/edit pages are populated with, and what a
//! submitted body is read back into before validation turns it into a
//! service input.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::ApiError;
use super::form_data::FormData;
use super::validation::{parse_id, parse_start_time, require};
use crate::models::artist::{Artist, ArtistInput};
use crate::models::show::ShowInput;
use crate::models::venue::{Venue, VenueInput};

fn blank_to_none(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn field(form: &FormData, key: &str) -> String {
    form.get(key).map(str::trim).unwrap_or_default().to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    #[must_use]
    pub fn from_form(form: &FormData) -> Self {
        Self {
            name: field(form, "name"),
            city: field(form, "city"),
            state: field(form, "state"),
            address: field(form, "address"),
            phone: field(form, "phone"),
            image_link: field(form, "image_link"),
            facebook_link: field(form, "facebook_link"),
            website_link: field(form, "website_link"),
            genres: form.get_all("genres"),
            seeking_talent: form.checked("seeking_talent"),
            seeking_description: field(form, "seeking_description"),
        }
    }

    pub fn into_input(self) -> Result<VenueInput, ApiError> {
        Ok(VenueInput {
            name: require(blank_to_none(self.name), "name")?,
            city: require(blank_to_none(self.city), "city")?,
            state: require(blank_to_none(self.state), "state")?,
            address: require(blank_to_none(self.address), "address")?,
            phone: blank_to_none(self.phone),
            image_link: blank_to_none(self.image_link),
            facebook_link: blank_to_none(self.facebook_link),
            website_link: blank_to_none(self.website_link),
            genres: self.genres,
            looking_for_talent: self.seeking_talent,
            seeking_description: blank_to_none(self.seeking_description),
        })
    }
}

impl From<Venue> for VenueForm {
    fn from(venue: Venue) -> Self {
        Self {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone.unwrap_or_default(),
            image_link: venue.image_link.unwrap_or_default(),
            facebook_link: venue.facebook_link.unwrap_or_default(),
            website_link: venue.website_link.unwrap_or_default(),
            genres: venue.genres,
            seeking_talent: venue.looking_for_talent,
            seeking_description: venue.seeking_description.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistForm {
    #[must_use]
    pub fn from_form(form: &FormData) -> Self {
        Self {
            name: field(form, "name"),
            city: field(form, "city"),
            state: field(form, "state"),
            phone: field(form, "phone"),
            image_link: field(form, "image_link"),
            facebook_link: field(form, "facebook_link"),
            website_link: field(form, "website_link"),
            genres: form.get_all("genres"),
            seeking_venue: form.checked("seeking_venue"),
            seeking_description: field(form, "seeking_description"),
        }
    }

    pub fn into_input(self) -> Result<ArtistInput, ApiError> {
        Ok(ArtistInput {
            name: require(blank_to_none(self.name), "name")?,
            city: require(blank_to_none(self.city), "city")?,
            state: require(blank_to_none(self.state), "state")?,
            phone: blank_to_none(self.phone),
            image_link: blank_to_none(self.image_link),
            facebook_link: blank_to_none(self.facebook_link),
            website_link: blank_to_none(self.website_link),
            genres: self.genres,
            looking_for_venues: self.seeking_venue,
            seeking_description: blank_to_none(self.seeking_description),
        })
    }
}

impl From<Artist> for ArtistForm {
    fn from(artist: Artist) -> Self {
        Self {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone.unwrap_or_default(),
            image_link: artist.image_link.unwrap_or_default(),
            facebook_link: artist.facebook_link.unwrap_or_default(),
            website_link: artist.website_link.unwrap_or_default(),
            genres: artist.genres,
            seeking_venue: artist.looking_for_venues,
            seeking_description: artist.seeking_description.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    /// Empty form with the start time pre-filled to `now`.
    #[must_use]
    pub fn blank(now: NaiveDateTime) -> Self {
        Self {
            artist_id: String::new(),
            venue_id: String::new(),
            start_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    #[must_use]
    pub fn from_form(form: &FormData) -> Self {
        Self {
            artist_id: field(form, "artist_id"),
            venue_id: field(form, "venue_id"),
            start_time: field(form, "start_time"),
        }
    }

    pub fn into_input(self) -> Result<ShowInput, ApiError> {
        Ok(ShowInput {
            venue_id: parse_id(Some(&self.venue_id), "venue_id")?,
            artist_id: parse_id(Some(&self.artist_id), "artist_id")?,
            start_time: parse_start_time(Some(&self.start_time))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn venue_form_reads_every_field() {
        let body = "name=The+Musical+Hop&city=San+Francisco&state=CA&address=1015+Folsom+Street\
                    &phone=123-123-1234&genres=Jazz&genres=Reggae&seeking_talent=y\
                    &seeking_description=&image_link=&facebook_link=&website_link=";
        let input = VenueForm::from_form(&FormData::parse(body.as_bytes()))
            .into_input()
            .unwrap();

        assert_eq!(input.name, "The Musical Hop");
        assert_eq!(input.address, "1015 Folsom Street");
        assert_eq!(input.phone.as_deref(), Some("123-123-1234"));
        assert_eq!(input.genres, vec!["Jazz", "Reggae"]);
        assert!(input.looking_for_talent);
        assert_eq!(input.seeking_description, None);
        assert_eq!(input.website_link, None);
    }

    #[test]
    fn venue_form_requires_address() {
        let form = VenueForm::from_form(&FormData::parse(b"name=Hall&city=Austin&state=TX"));
        let err = form.into_input().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: address is required");
    }

    #[test]
    fn artist_form_round_trips_through_edit() {
        let artist = Artist {
            id: 4,
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            image_link: Some("https://example.com/gnp.jpg".to_string()),
            facebook_link: None,
            website_link: None,
            genres: vec!["Rock n Roll".to_string()],
            looking_for_venues: true,
            seeking_description: None,
        };

        let form = ArtistForm::from(artist.clone());
        assert!(form.seeking_venue);
        assert_eq!(form.genres, vec!["Rock n Roll"]);
        assert_eq!(form.phone, "");

        let input = form.into_input().unwrap();
        assert_eq!(input.image_link, artist.image_link);
        assert_eq!(input.phone, None);
        assert!(input.looking_for_venues);
    }

    #[test]
    fn artist_checkbox_off_unless_y() {
        let form = ArtistForm::from_form(&FormData::parse(
            b"name=A&city=B&state=C&seeking_venue=true",
        ));
        assert!(!form.seeking_venue);
    }

    #[test]
    fn show_form_parses_ids_and_time() {
        let form = ShowForm::from_form(&FormData::parse(
            b"artist_id=4&venue_id=1&start_time=2035-04-01+20%3A00%3A00",
        ));
        let input = form.into_input().unwrap();
        assert_eq!(input.artist_id, 4);
        assert_eq!(input.venue_id, 1);
        assert_eq!(
            input.start_time,
            NaiveDate::from_ymd_opt(2035, 4, 1)
                .unwrap()
                .and_hms_opt(20, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn show_form_rejects_missing_artist() {
        let form = ShowForm::from_form(&FormData::parse(b"venue_id=1&start_time=2035-04-01+20:00:00"));
        assert!(form.into_input().is_err());
    }

    #[test]
    fn blank_show_form_prefills_now() {
        let now = NaiveDate::from_ymd_opt(2030, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(ShowForm::blank(now).start_time, "2030-01-02 03:04:05");
    }
}
